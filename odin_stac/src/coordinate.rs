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

/// spherical coordinates on the unit sphere.
/// A [`Coordinate`] carries all three representations we need for great circle computations:
/// geodetic degrees, normalized (φ,θ) radians and a unit cartesian vector. They are computed once
/// on construction and never change, i.e. Coordinates are immutable values.
/// [`LatLon`] is the plain degree pair we get from CMR ordinate strings and hand out in bounding boxes.

use std::fmt;
use serde::{Serialize,Deserialize};

use crate::HALF_PI;
use crate::angle::{normalize_phi_theta, is_valid_latitude, is_valid_longitude};
use crate::cartesian3::Cartesian3;

/* #region LatLon ***************************************************************************************************/

/// geodetic latitude/longitude in degrees, in CMR ordinate order
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64
}

impl LatLon {
    pub fn new (lat: f64, lon: f64)->Self { LatLon{lat,lon} }

    pub fn is_normalized (&self)->bool {
        is_valid_latitude(self.lat) && is_valid_longitude(self.lon)
    }

    /// in-range values are returned as is, everything else goes through spherical normalization
    /// (i.e. a latitude beyond a pole flips the longitude)
    pub fn normalized (&self)->LatLon {
        if self.is_normalized() { *self } else { Coordinate::from(*self).to_lat_lon() }
    }

    /// RFC 7946 position order
    pub fn to_lon_lat (&self)->[f64;2] { [self.lon, self.lat] }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/* #endregion LatLon */

/* #region Coordinate ***********************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Coordinate {
    phi: f64,   // latitude radians [-π/2,π/2]
    theta: f64, // longitude radians [-π,π] (at the poles whatever we got)
    p: Cartesian3
}

impl Coordinate {
    pub fn from_lat_lon (lat: f64, lon: f64)->Self {
        Coordinate::from_phi_theta( lat.to_radians(), lon.to_radians())
    }

    pub fn from_phi_theta (phi: f64, theta: f64)->Self {
        let (φ,θ) = normalize_phi_theta( phi, theta);
        let cos_φ = φ.cos();
        let p = Cartesian3::new( cos_φ * θ.cos(), cos_φ * θ.sin(), φ.sin());

        Coordinate { phi: φ, theta: θ, p }
    }

    pub fn from_cartesian (x: f64, y: f64, z: f64)->Self {
        Coordinate::from_cartesian3( &Cartesian3::new(x,y,z))
    }

    /// note this projects the vector onto the unit sphere
    pub fn from_cartesian3 (v: &Cartesian3)->Self {
        let p = v.scaled_to_unit_length();
        let phi = p.z.clamp(-1.0, 1.0).asin();
        let theta = p.y.atan2(p.x);

        Coordinate { phi, theta, p }
    }

    #[inline] pub fn phi (&self)->f64 { self.phi }
    #[inline] pub fn theta (&self)->f64 { self.theta }
    #[inline] pub fn cartesian (&self)->&Cartesian3 { &self.p }

    #[inline] pub fn latitude (&self)->f64 { self.phi.to_degrees() }
    #[inline] pub fn longitude (&self)->f64 { self.theta.to_degrees() }

    pub fn to_lat_lon (&self)->LatLon {
        LatLon::new( self.latitude(), self.longitude())
    }

    pub fn is_pole (&self)->bool { self.phi.abs() == HALF_PI }

    pub fn dot (&self, other: &Coordinate)->f64 {
        self.p.dot( &other.p)
    }

    /// the (unit) normal of the plane spanned by self and other, as a Coordinate.
    /// Returns +X for parallel vectors
    pub fn cross (&self, other: &Coordinate)->Coordinate {
        Coordinate::from_cartesian3( &self.p.cross( &other.p))
    }

    /// central angle in radians, which is the great circle distance on the unit sphere
    pub fn distance_to (&self, other: &Coordinate)->f64 {
        self.dot(other).clamp(-1.0, 1.0).acos()
    }

    pub fn antipode (&self)->Coordinate {
        Coordinate::from_cartesian3( &-self.p)
    }
}

impl From<LatLon> for Coordinate {
    fn from (ll: LatLon)->Self { Coordinate::from_lat_lon( ll.lat, ll.lon) }
}

impl From<&LatLon> for Coordinate {
    fn from (ll: &LatLon)->Self { Coordinate::from_lat_lon( ll.lat, ll.lon) }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.latitude(), self.longitude())
    }
}

/* #endregion Coordinate */
