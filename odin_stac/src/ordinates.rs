/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

/// parsers for CMR ordinate strings such as "30 -10 70 33" or "30,-10,70,33".
/// Points and polygon rings are `lat lon` pairs, boxes are `south west north east`.
/// We fail on the first malformed ordinate instead of dropping data.

use lazy_static::lazy_static;
use regex::Regex;

use crate::bbox::BoundingBox;
use crate::coordinate::LatLon;
use crate::errors::{OdinStacError, Result, invalid_box, ordinate_count};

lazy_static! {
    static ref ORDINATE_SEP_RE: Regex = Regex::new( r"[\s,]+").unwrap();
}

pub fn parse_ordinate_string (input: &str)->Result<Vec<f64>> {
    ORDINATE_SEP_RE.split( input.trim())
        .filter( |s| !s.is_empty())
        .map( |s| parse_ordinate( s, input))
        .collect()
}

fn parse_ordinate (s: &str, input: &str)->Result<f64> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err( OdinStacError::InvalidOrdinate( s.to_string(), input.to_string()))
    }
}

/// parse `lat lon ..` pairs
pub fn parse_point_string (input: &str)->Result<Vec<LatLon>> {
    let ords = parse_ordinate_string( input)?;
    if ords.len() % 2 != 0 {
        return Err( ordinate_count( input, format!("expected lat/lon pairs, got {} values", ords.len())))
    }

    Ok( ords.chunks_exact(2).map( |c| LatLon::new( c[0], c[1])).collect() )
}

/// parse and concatenate the points of all input strings
pub fn parse_point_strings<S: AsRef<str>> (inputs: &[S])->Result<Vec<LatLon>> {
    let mut points = Vec::new();
    for s in inputs {
        points.extend( parse_point_string( s.as_ref())?);
    }
    Ok(points)
}

/// parse a CMR `south west north east` box. Note the result is in `[west,south,east,north]` order
pub fn parse_cmr_box (input: &str)->Result<BoundingBox> {
    let ords = parse_ordinate_string( input)?;
    let snwe = <[f64;4]>::try_from( ords.as_slice())
        .map_err( |_| ordinate_count( input, format!("exactly 4 box coordinates are required, got {}", ords.len())))?;

    if snwe[0] > snwe[2] {
        return Err( invalid_box( input, format!("south {} > north {}", snwe[0], snwe[2])))
    }
    Ok( BoundingBox::from_snwe( &snwe))
}
