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
#![allow(uncommon_codepoints)]

#[doc = include_str!("../doc/odin_stac.md")]

use std::f64::consts::PI as STD_PI;

pub mod errors;
pub mod angle;
pub mod cartesian3;
pub mod coordinate;
pub mod arc;
pub mod bbox;
pub mod ordinates;
pub mod config;
pub mod extent;
pub mod geometry;

pub use errors::{OdinStacError, Result};
pub use coordinate::{Coordinate, LatLon};
pub use arc::Arc;
pub use bbox::{BoundingBox, WHOLE_WORLD, merge, merge_all, add_points};
pub use config::{ExtentConfig, load_config};
pub use extent::{CmrSpatial, cmr_spatial_to_extent};
pub use geometry::{cmr_spatial_to_geometry, geometry_from_str};

pub const PI: f64 = STD_PI;
pub const HALF_PI: f64 = PI / 2.0;
pub const TWO_PI: f64 = PI * 2.0;
