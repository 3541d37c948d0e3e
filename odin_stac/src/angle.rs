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

//! angle normalization for spherical coordinates.
//! Radian functions are used by [`crate::coordinate::Coordinate`], the degree range checks by
//! [`crate::coordinate::LatLon`].

use crate::{PI, HALF_PI, TWO_PI};

/// wrap radians into [-π,π). Values already in range are returned unchanged so that
/// we don't pick up round-off errors for normal input
#[inline]
pub fn wrap_pi (rad: f64) -> f64 {
    if rad >= -PI && rad < PI { rad } else { (rad + PI).rem_euclid(TWO_PI) - PI }
}

/// normalize a (φ,θ) pair: φ is wrapped into [-π,π) and then reflected into [-π/2,π/2], flipping θ
/// by π if we crossed a pole. θ is then wrapped into [-π,π), keeping +π if the input was positive.
/// At the poles the input θ is preserved since longitude is undefined there
pub fn normalize_phi_theta (phi: f64, theta: f64) -> (f64,f64) {
    let orig_theta = theta;
    let mut φ = wrap_pi(phi);
    let mut θ = theta;

    if φ > HALF_PI {
        φ = PI - φ;
        θ += PI;
    } else if φ < -HALF_PI {
        φ = -PI - φ;
        θ += PI;
    }

    θ = wrap_pi(θ);
    if θ == -PI && orig_theta > 0.0 { θ = PI }

    if φ.abs() == HALF_PI { θ = orig_theta }

    (φ, θ)
}

#[inline]
pub fn is_valid_latitude (lat: f64) -> bool { lat >= -90.0 && lat <= 90.0 }

#[inline]
pub fn is_valid_longitude (lon: f64) -> bool { lon >= -180.0 && lon <= 180.0 }
