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

/// great circle arcs between two coordinates.
/// The latitude of a great circle arc is extremal where the arc crosses the meridian of its plane
/// normal, i.e. the normal vector itself gives us the candidate inflection points. Since the normal
/// is computed from endpoints in west-to-east order it always points into the northern hemisphere,
/// which means the northern extremum is opposite of the normal longitude and the southern one is at it.

use std::fmt;

use crate::PI;
use crate::coordinate::Coordinate;
use crate::errors::{OdinStacError, Result};

/// cross products below this length are treated as identical or antipodal endpoints
const MIN_NORMAL_LENGTH: f64 = 1e-12;

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Arc {
    coord_a: Coordinate,
    coord_b: Coordinate,
    normal: Coordinate
}

impl Arc {
    /// create the shorter arc between `a` and `b`. Endpoints are stored so that the arc runs from
    /// `coord_a` east to `coord_b`, which might cross the antimeridian
    pub fn new (a: &Coordinate, b: &Coordinate)->Result<Self> {
        let (first, second) = if b.theta() < a.theta() { (b, a) } else { (a, b) };

        let (coord_a, coord_b) = if (second.theta() - first.theta()).abs() > PI {
            (*second, *first) // the short way goes across the antimeridian
        } else {
            (*first, *second)
        };

        let n = coord_a.cartesian().cross( coord_b.cartesian());
        if n.length() < MIN_NORMAL_LENGTH {
            return Err( OdinStacError::DegenerateArc( coord_a.to_string(), coord_b.to_string()))
        }

        let normal = Coordinate::from_cartesian3( &n);
        Ok( Arc { coord_a, coord_b, normal } )
    }

    #[inline] pub fn coord_a (&self)->&Coordinate { &self.coord_a }
    #[inline] pub fn coord_b (&self)->&Coordinate { &self.coord_b }
    #[inline] pub fn normal (&self)->&Coordinate { &self.normal }

    /// does the (open) longitude interval of this arc contain `lon` (degrees)
    pub fn covers_longitude (&self, lon: f64)->bool {
        let theta = lon.to_radians();
        let theta_min = self.coord_a.theta().min( self.coord_b.theta());
        let theta_max = self.coord_a.theta().max( self.coord_b.theta());

        if (theta_max - theta_min).abs() < PI {
            theta_min < theta && theta < theta_max
        } else {
            theta > theta_max || theta < theta_min
        }
    }

    /// the point of extremal latitude on this arc, if the arc has one between its endpoints.
    /// Arcs that are monotonic in latitude over their span return `None`
    pub fn inflection (&self)->Option<Coordinate> {
        let n_lat = self.normal.latitude();
        let n_lon = self.normal.longitude();

        let south_lat = -90.0 + n_lat.abs();
        let north_lat = -south_lat;

        let south_lon = n_lon;
        let mut north_lon = n_lon + 180.0;
        if north_lon > 180.0 { north_lon -= 360.0 }

        if self.covers_longitude( north_lon) {
            Some( Coordinate::from_lat_lon( north_lat, north_lon))
        } else if self.covers_longitude( south_lon) {
            Some( Coordinate::from_lat_lon( south_lat, south_lon))
        } else {
            None
        }
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.coord_a, self.coord_b)
    }
}
