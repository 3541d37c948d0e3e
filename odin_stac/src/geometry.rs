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

/// conversion of CMR spatial fields into GeoJSON geometries.
/// CMR ordinate strings are `lat lon` ordered, GeoJSON positions are `[lon,lat]` (RFC 7946 section 3.1.1).
/// Single geometries map to their simple GeoJSON type, lists with more than one element to the
/// respective Multi* type.

use geojson::{Geometry, Position, Value};
use tracing::debug;

use crate::coordinate::LatLon;
use crate::errors::{invalid_geometry, Result};
use crate::extent::{non_empty, CmrSpatial};
use crate::ordinates::{parse_cmr_box, parse_point_string};

fn position (p: &LatLon)->Position {
    p.to_lon_lat().to_vec()
}

/// polygon rings have to be closed in GeoJSON
fn ring_positions (input: &str)->Result<Vec<Position>> {
    let mut ring = line_positions( input)?;
    let closing = match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if first != last => Some( first.clone()),
        _ => None
    };
    if let Some(p) = closing { ring.push(p) }
    Ok(ring)
}

fn line_positions (input: &str)->Result<Vec<Position>> {
    Ok( parse_point_string( input)?.iter().map( position).collect() )
}

pub fn polygon_coordinates<S: AsRef<str>> (rings: &[S])->Result<Vec<Vec<Position>>> {
    rings.iter().map( |r| ring_positions( r.as_ref())).collect()
}

/// the closed rectangle of a CMR `south west north east` box
pub fn box_coordinates (input: &str)->Result<Vec<Vec<Position>>> {
    let b = parse_cmr_box( input)?;
    Ok( vec![ vec![
        vec![b.west, b.south],
        vec![b.east, b.south],
        vec![b.east, b.north],
        vec![b.west, b.north],
        vec![b.west, b.south],
    ]])
}

fn single_or_multi<T> (mut items: Vec<T>, single: fn(T)->Value, multi: fn(Vec<T>)->Value)->Option<Geometry> {
    match items.len() {
        0 => None,
        1 => items.pop().map( |item| Geometry::new( single(item))),
        _ => Some( Geometry::new( multi(items)))
    }
}

pub fn polygons_to_geometry<S: AsRef<str>> (polygons: &[Vec<S>])->Result<Option<Geometry>> {
    let polys = polygons.iter().map( |rings| polygon_coordinates( rings)).collect::<Result<Vec<_>>>()?;
    Ok( single_or_multi( polys, Value::Polygon, Value::MultiPolygon))
}

pub fn boxes_to_geometry<S: AsRef<str>> (boxes: &[S])->Result<Option<Geometry>> {
    let polys = boxes.iter().map( |b| box_coordinates( b.as_ref())).collect::<Result<Vec<_>>>()?;
    Ok( single_or_multi( polys, Value::Polygon, Value::MultiPolygon))
}

/// all points of all input strings
pub fn points_to_geometry<S: AsRef<str>> (points: &[S])->Result<Option<Geometry>> {
    let mut positions: Vec<Position> = Vec::new();
    for s in points {
        positions.extend( parse_point_string( s.as_ref())?.iter().map( position));
    }
    Ok( single_or_multi( positions, Value::Point, Value::MultiPoint))
}

pub fn lines_to_geometry<S: AsRef<str>> (lines: &[S])->Result<Option<Geometry>> {
    let lines = lines.iter().map( |s| line_positions( s.as_ref())).collect::<Result<Vec<_>>>()?;
    Ok( single_or_multi( lines, Value::LineString, Value::MultiLineString))
}

/// the GeoJSON geometry of a CMR record, or `None` if it does not have spatial data.
/// Polygons take precedence over boxes, points and lines
pub fn cmr_spatial_to_geometry (spatial: &CmrSpatial)->Result<Option<Geometry>> {
    if let Some(polygons) = non_empty(&spatial.polygons) {
        polygons_to_geometry( polygons)
    } else if let Some(boxes) = non_empty(&spatial.boxes) {
        boxes_to_geometry( boxes)
    } else if let Some(points) = non_empty(&spatial.points) {
        points_to_geometry( points)
    } else if let Some(lines) = non_empty(&spatial.lines) {
        lines_to_geometry( lines)
    } else {
        Ok(None)
    }
}

/// parse a client provided GeoJSON geometry (e.g. an `intersects` query parameter)
pub fn geometry_from_str (input: &str)->Result<Geometry> {
    let json: serde_json::Value = serde_json::from_str( input).map_err( |e| {
        debug!("failed to parse GeoJSON '{}': {}", input, e);
        invalid_geometry("unable to parse, please verify it is a valid GeoJSON geometry")
    })?;

    if json.get("type").is_none() {
        debug!("missing 'type' in GeoJSON geometry '{}'", input);
        return Err( invalid_geometry("missing ['type']"))
    }
    if json.get("coordinates").is_none() {
        debug!("missing 'coordinates' in GeoJSON geometry '{}'", input);
        return Err( invalid_geometry("missing ['coordinates']"))
    }

    serde_json::from_value::<Geometry>( json).map_err( |e| {
        debug!("not a GeoJSON geometry '{}': {}", input, e);
        invalid_geometry( e)
    })
}
