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

use std::{fs, path::Path};
use serde::{Serialize,Deserialize};
use tracing::debug;

use crate::errors::Result;

/// policy settings for CMR spatial extent conversion, normally read from a RON file like
/// ```ron
/// ExtentConfig(
///     whole_world_fallback: true,
///     geodesic_polygons: true,
///     drop_pole_inflections: true,
/// )
/// ```
/// missing fields get their default values
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ExtentConfig {
    /// records without any spatial data get the whole world box (otherwise `None`)
    pub whole_world_fallback: bool,

    /// extend polygon envelopes by the latitude extrema of their great circle edges
    pub geodesic_polygons: bool,

    /// ignore edge inflection points that are exactly at a pole
    pub drop_pole_inflections: bool,
}

impl Default for ExtentConfig {
    fn default()->Self {
        ExtentConfig {
            whole_world_fallback: true,
            geodesic_polygons: true,
            drop_pole_inflections: true,
        }
    }
}

impl ExtentConfig {
    pub fn from_ron_str (s: &str)->Result<Self> {
        Ok( ron::from_str(s)? )
    }
}

pub fn load_config (path: impl AsRef<Path>)->Result<ExtentConfig> {
    let path = path.as_ref();
    let input = fs::read_to_string( path)?;
    let config = ExtentConfig::from_ron_str( &input)?;
    debug!("loaded extent config from {:?}: {:?}", path, config);
    Ok(config)
}
