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

/// geodetic bounding boxes in STAC/GeoJSON `[west,south,east,north]` order.
/// A box with `west > east` crosses the antimeridian. Boxes are combined with [`merge`], which
/// together with `None` as the "no extent yet" value forms a monoid, so any number of geometries
/// can be reduced with a plain `fold`.

use std::fmt;
use serde::{Serialize,Deserialize};

use crate::coordinate::LatLon;

pub const WHOLE_WORLD: BoundingBox = BoundingBox { west: -180.0, south: -90.0, east: 180.0, north: 90.0 };

#[derive(Debug,Copy,Clone,PartialEq,Serialize,Deserialize)]
#[serde(from = "[f64;4]", into = "[f64;4]")]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64
}

impl BoundingBox {
    pub fn new (west: f64, south: f64, east: f64, north: f64)->Self {
        BoundingBox{ west, south, east, north }
    }

    pub fn from_wsen (wsen: &[f64;4])->Self {
        BoundingBox{ west: wsen[0], south: wsen[1], east: wsen[2], north: wsen[3] }
    }

    /// CMR boxes come as `south west north east`
    pub fn from_snwe (snwe: &[f64;4])->Self {
        BoundingBox{ west: snwe[1], south: snwe[0], east: snwe[3], north: snwe[2] }
    }

    /// the degenerate box of a single point
    pub fn from_point (p: &LatLon)->Self {
        BoundingBox{ west: p.lon, south: p.lat, east: p.lon, north: p.lat }
    }

    /// plain per-axis min/max of the given points, without any antimeridian handling.
    /// This is only correct if the points do not wrap around in longitude
    pub fn from_vertices<'a> (points: impl IntoIterator<Item=&'a LatLon>)->Option<Self> {
        points.into_iter().fold( None, |acc: Option<BoundingBox>, p| {
            match acc {
                Some(b) => Some( BoundingBox {
                    west: b.west.min(p.lon),
                    south: b.south.min(p.lat),
                    east: b.east.max(p.lon),
                    north: b.north.max(p.lat)
                }),
                None => Some( BoundingBox::from_point(p))
            }
        })
    }

    pub fn to_wsen_array (&self)->[f64;4] {
        [self.west, self.south, self.east, self.north]
    }

    #[inline] pub fn crosses_antimeridian (&self)->bool { self.west > self.east }

    pub fn is_whole_world (&self)->bool { *self == WHOLE_WORLD }

    /// east-west extent in degrees, going east from `west`
    pub fn lon_span (&self)->f64 {
        if self.crosses_antimeridian() { 360.0 - (self.west - self.east) } else { self.east - self.west }
    }

    pub fn covers_longitude (&self, lon: f64)->bool {
        if self.crosses_antimeridian() {
            lon >= self.west || lon <= self.east
        } else {
            lon >= self.west && lon <= self.east
        }
    }

    pub fn contains (&self, p: &LatLon)->bool {
        p.lat >= self.south && p.lat <= self.north && self.covers_longitude(p.lon)
    }

    /// the minimal box covering both self and other
    pub fn union (&self, other: &BoundingBox)->BoundingBox {
        let (west,east) = match MergeCase::of( self, other) {
            MergeCase::BothCross(b1,b2) => merge_both_crossing( b1, b2),
            MergeCase::OneCrosses{ crossing, other } => merge_one_crossing( crossing, other),
            MergeCase::NeitherCrosses(b1,b2) => merge_none_crossing( b1, b2)
        };

        BoundingBox {
            west,
            south: self.south.min( other.south),
            east,
            north: self.north.max( other.north)
        }
    }
}

impl From<[f64;4]> for BoundingBox {
    fn from (wsen: [f64;4])->Self { BoundingBox::from_wsen(&wsen) }
}

impl From<BoundingBox> for [f64;4] {
    fn from (bbox: BoundingBox)->Self { bbox.to_wsen_array() }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{},{},{}]", self.west, self.south, self.east, self.north)
    }
}

/* #region merge ****************************************************************************************************/

/// how two boxes relate to the antimeridian. Resolved once per merge
#[derive(Debug)]
enum MergeCase<'a> {
    NeitherCrosses(&'a BoundingBox, &'a BoundingBox),
    OneCrosses { crossing: &'a BoundingBox, other: &'a BoundingBox },
    BothCross(&'a BoundingBox, &'a BoundingBox)
}

impl<'a> MergeCase<'a> {
    fn of (b1: &'a BoundingBox, b2: &'a BoundingBox)->Self {
        match (b1.crosses_antimeridian(), b2.crosses_antimeridian()) {
            (true,true) => MergeCase::BothCross(b1,b2),
            (true,false) => MergeCase::OneCrosses{ crossing: b1, other: b2 },
            (false,true) => MergeCase::OneCrosses{ crossing: b2, other: b1 },
            (false,false) => MergeCase::NeitherCrosses(b1,b2)
        }
    }
}

fn whole_world_if_closed (west: f64, east: f64)->(f64,f64) {
    if west <= east { (WHOLE_WORLD.west, WHOLE_WORLD.east) } else { (west, east) }
}

fn merge_both_crossing (b1: &BoundingBox, b2: &BoundingBox)->(f64,f64) {
    whole_world_if_closed( b1.west.min(b2.west), b1.east.max(b2.east))
}

/// grow the crossing box east or west, whatever adds less span. Ties extend east
fn merge_one_crossing (crossing: &BoundingBox, other: &BoundingBox)->(f64,f64) {
    if other.west >= crossing.west || other.east <= crossing.east {
        return (crossing.west, crossing.east) // other is already covered
    }

    let east_growth = other.east - crossing.east;
    let west_growth = crossing.west - other.west;

    if east_growth <= west_growth {
        whole_world_if_closed( crossing.west, other.east)
    } else {
        whole_world_if_closed( other.west, crossing.east)
    }
}

/// pick the shorter of the plain union and the union that goes the other way around through
/// the antimeridian. Ties keep the plain union
fn merge_none_crossing (box1: &BoundingBox, box2: &BoundingBox)->(f64,f64) {
    let (b1,b2) = if box1.west > box2.west { (box2,box1) } else { (box1,box2) };

    let west = b1.west;
    let east = b1.east.max( b2.east);
    let dist = east - west;

    let alt_west = b2.west;
    let alt_east = b1.east;
    let alt_dist = (180.0 - alt_west) + (alt_east + 180.0);

    if alt_dist < dist { (alt_west, alt_east) } else { (west, east) }
}

/// merge two optional boxes. `None` is the identity element
pub fn merge (box1: Option<BoundingBox>, box2: Option<BoundingBox>)->Option<BoundingBox> {
    match (box1, box2) {
        (Some(b1), Some(b2)) => Some( b1.union(&b2)),
        (Some(b), None) | (None, Some(b)) => Some(b),
        (None, None) => None
    }
}

/// reduce any number of boxes into one
pub fn merge_all (boxes: impl IntoIterator<Item=BoundingBox>)->Option<BoundingBox> {
    boxes.into_iter().fold( None, |acc, b| merge( acc, Some(b)))
}

/// extend `bbox` by points, using the same antimeridian rules as [`merge`]
pub fn add_points<'a> (bbox: Option<BoundingBox>, points: impl IntoIterator<Item=&'a LatLon>)->Option<BoundingBox> {
    points.into_iter().fold( bbox, |acc, p| merge( acc, Some( BoundingBox::from_point(p))))
}

/* #endregion merge */
