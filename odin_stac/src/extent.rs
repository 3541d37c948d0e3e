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

/// conversion of CMR spatial fields into STAC `[west,south,east,north]` extents.
/// Polygon edges are great circle arcs, hence their envelope includes the latitude extrema
/// (inflection points) between vertices. Points, lines and boxes only use their vertices.
/// Multi-part geometries are reduced with [`merge`].

use serde::{Serialize,Deserialize};
use tracing::{debug, trace};

use crate::arc::Arc;
use crate::bbox::{add_points, merge, BoundingBox, WHOLE_WORLD};
use crate::config::ExtentConfig;
use crate::coordinate::{Coordinate, LatLon};
use crate::errors::Result;
use crate::ordinates::{parse_cmr_box, parse_point_string, parse_point_strings};

/// the spatial fields of a CMR collection or granule record, as returned by CMR/GraphQL.
/// All values are ordinate strings. Polygons are lists of rings with the outer ring first
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct CmrSpatial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygons: Option<Vec<Vec<String>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxes: Option<Vec<String>>,
}

/// empty lists count as missing
pub(crate) fn non_empty<T> (v: &Option<Vec<T>>)->Option<&[T]> {
    v.as_deref().filter( |v| !v.is_empty())
}

impl CmrSpatial {
    pub fn has_spatial_data (&self)->bool {
        non_empty(&self.polygons).is_some() || non_empty(&self.points).is_some()
            || non_empty(&self.lines).is_some() || non_empty(&self.boxes).is_some()
    }
}

/// the STAC extent of a CMR record. Polygons take precedence over points, lines and boxes.
/// Records without spatial data get the whole world box unless this is disabled in `config`
pub fn cmr_spatial_to_extent (spatial: &CmrSpatial, config: &ExtentConfig)->Result<Option<BoundingBox>> {
    if let Some(polygons) = non_empty(&spatial.polygons) {
        polygons_bbox( polygons, config)
    } else if let Some(points) = non_empty(&spatial.points) {
        points_bbox( points)
    } else if let Some(lines) = non_empty(&spatial.lines) {
        points_bbox( lines)
    } else if let Some(boxes) = non_empty(&spatial.boxes) {
        boxes_bbox( boxes)
    } else if config.whole_world_fallback {
        debug!("no spatial data, using whole world extent");
        Ok( Some(WHOLE_WORLD))
    } else {
        Ok(None)
    }
}

/// reduce polygons given as rings of ordinate strings. Only the outer (first) ring is used
pub fn polygons_bbox<S: AsRef<str>> (polygons: &[Vec<S>], config: &ExtentConfig)->Result<Option<BoundingBox>> {
    polygons.iter().try_fold( None, |acc, rings| {
        let bbox = match rings.first() {
            Some(outer) => ring_bbox( &parse_point_string( outer.as_ref())?, config),
            None => None
        };
        Ok( merge( acc, bbox))
    })
}

/// all points of all ordinate strings, which works for both point and line lists
pub fn points_bbox<S: AsRef<str>> (inputs: &[S])->Result<Option<BoundingBox>> {
    Ok( add_points( None, &parse_point_strings( inputs)?))
}

pub fn boxes_bbox<S: AsRef<str>> (boxes: &[S])->Result<Option<BoundingBox>> {
    boxes.iter().try_fold( None, |acc, s| Ok( merge( acc, Some( parse_cmr_box( s.as_ref())?))))
}

/// the envelope of a polygon ring given as `lat/lon` vertices. The ring can be explicitly closed
/// or not, the closing edge is implied.
/// Vertices and edge inflection points are combined with the antimeridian aware [`merge`], hence
/// rings that cross the antimeridian keep their short longitude span
pub fn ring_bbox (ring: &[LatLon], config: &ExtentConfig)->Option<BoundingBox> {
    let vertices: Vec<LatLon> = ring.iter().map( |p| p.normalized()).collect();

    if !config.geodesic_polygons {
        return add_points( None, &vertices)
    }

    let coords: Vec<Coordinate> = vertices.iter().map( Coordinate::from).collect();
    let n = coords.len();

    let mut points: Vec<LatLon> = Vec::with_capacity( 2*n);
    for (i,coord) in coords.iter().enumerate() {
        points.push( vertices[i]);
        if let Some(p) = edge_inflection( coord, &coords[(i+1) % n], config) {
            points.push(p);
        }
    }

    add_points( None, &points)
}

/// inflection points exactly at a pole are (by default) ignored - pole vertices are already covered
/// by the vertex extremes
fn edge_inflection (a: &Coordinate, b: &Coordinate, config: &ExtentConfig)->Option<LatLon> {
    match Arc::new( a, b) {
        Ok(arc) => arc.inflection()
            .filter( |c| !(config.drop_pole_inflections && c.is_pole()))
            .map( |c| c.to_lat_lon()),
        Err(e) => {
            trace!("no inflection: {}", e);
            None
        }
    }
}
