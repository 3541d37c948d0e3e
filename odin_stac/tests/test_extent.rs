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
#![allow(unused)]

use odin_stac::OdinStacError;
use odin_stac::bbox::{BoundingBox, WHOLE_WORLD};
use odin_stac::config::ExtentConfig;
use odin_stac::arc::Arc;
use odin_stac::coordinate::{Coordinate, LatLon};
use odin_stac::extent::*;
use odin_stac::ordinates::parse_point_string;

/// STAC extents of CMR spatial records
/// run with "cargo test --test test_extent -- --nocapture"

const EPS: f64 = 1e-9;

fn init_tracing () {
    let _ = tracing_subscriber::fmt().with_max_level( tracing::Level::TRACE).with_test_writer().try_init();
}

fn assert_bbox_close (b: &BoundingBox, wsen: [f64;4]) {
    let a = b.to_wsen_array();
    for i in 0..4 {
        assert!( (a[i] - wsen[i]).abs() < EPS, "{} != {:?}", b, wsen);
    }
}

fn strings (s: &[&str])->Vec<String> {
    s.iter().map( |s| s.to_string()).collect()
}

fn ring (s: &str)->Vec<LatLon> {
    parse_point_string( s).unwrap()
}

#[test]
fn test_geodesic_ring () {
    init_tracing();
    let config = ExtentConfig::default();

    // the edges bulge beyond the vertex latitudes
    let b = ring_bbox( &ring( "10 -30 10 30 -10 30 -10 -30"), &config).unwrap();
    println!("geodesic ring bbox: {}", b);
    assert_bbox_close( &b, [-30.0, -11.508393365822329, 30.0, 11.508393365822329]);

    // explicitly closed rings give the same result
    let b1 = ring_bbox( &ring( "10 -30 10 30 -10 30 -10 -30 10 -30"), &config).unwrap();
    assert_bbox_close( &b1, b.to_wsen_array());

    let b = ring_bbox( &ring( "0 0 0 10 10 10 10 0"), &config).unwrap();
    assert_bbox_close( &b, [0.0, 0.0, 10.0, 10.037423045910685]);

    // across the antimeridian
    let b = ring_bbox( &ring( "10 170 10 -170 -10 -170 -10 170"), &config).unwrap();
    println!("antimeridian ring bbox: {}", b);
    assert!( b.crosses_antimeridian());
    assert_bbox_close( &b, [170.0, -10.15108171104815, -170.0, 10.15108171104815]);
}

#[test]
fn test_antimeridian_ring_without_inflections () {
    init_tracing();

    // short edges, none of them has an inflection point
    let vertices = ring( "0 170 10 -170 5 175");
    let coords: Vec<Coordinate> = vertices.iter().map( Coordinate::from).collect();
    for i in 0..coords.len() {
        let arc = Arc::new( &coords[i], &coords[(i+1) % coords.len()]).unwrap();
        assert!( arc.inflection().is_none(), "unexpected inflection on {}", arc);
    }

    let b = ring_bbox( &vertices, &ExtentConfig::default()).unwrap();
    println!("geodesic: {}", b);
    assert!( b.crosses_antimeridian());
    assert_eq!( b, BoundingBox::new( 170.0, 0.0, -170.0, 10.0));
    assert_eq!( b.lon_span(), 20.0);

    let config = ExtentConfig { geodesic_polygons: false, ..ExtentConfig::default() };
    assert_eq!( ring_bbox( &vertices, &config), Some(b));
}

#[test]
fn test_antimeridian_ring_mixed_edges () {
    // only the northern and southern edges have inflection points
    let vertices = ring( "10 170 10 -170 0 -175 0 175");
    let b = ring_bbox( &vertices, &ExtentConfig::default()).unwrap();
    println!("geodesic: {}", b);
    assert!( b.crosses_antimeridian());
    assert_bbox_close( &b, [170.0, 0.0, -170.0, 10.15108171104815]);
}

#[test]
fn test_vertex_ring () {
    let config = ExtentConfig { geodesic_polygons: false, ..ExtentConfig::default() };
    let b = ring_bbox( &ring( "10 -30 10 30 -10 30 -10 -30"), &config).unwrap();
    assert_eq!( b, BoundingBox::new( -30.0, -10.0, 30.0, 10.0));

    // the plain vertex envelope of a lon/lat vertex set. The geodesic envelope of the same ring
    // reaches further north
    let vertices = [ LatLon::new( -10.0, 30.0), LatLon::new( 33.0, 70.0), LatLon::new( 66.0, -145.0) ];
    let b = BoundingBox::from_vertices( &vertices).unwrap();
    assert_eq!( b.to_wsen_array(), [-145.0, -10.0, 70.0, 66.0]);

    let b = ring_bbox( &vertices, &ExtentConfig::default()).unwrap();
    println!("geodesic envelope: {}", b);
    assert!( b.north > 66.0);
    assert_eq!( b.south, -10.0);

    assert!( ring_bbox( &[], &ExtentConfig::default()).is_none());
}

#[test]
fn test_pole_inflection () {
    init_tracing();

    // the 80 0 -> 80 180 edge runs along a meridian, its inflection candidate is a pole
    let vertices = ring( "80 0 80 180 70 90");

    let b = ring_bbox( &vertices, &ExtentConfig::default()).unwrap();
    println!("without pole inflections: {}", b);
    assert_eq!( b.south, 70.0);
    assert!( (b.north - 80.98314293629394).abs() < 1e-6);

    let config = ExtentConfig { drop_pole_inflections: false, ..ExtentConfig::default() };
    let b = ring_bbox( &vertices, &config).unwrap();
    println!("with pole inflections: {}", b);
    assert!( b.south < -89.999);
}

#[test]
fn test_unnormalized_vertices () {
    let config = ExtentConfig { geodesic_polygons: false, ..ExtentConfig::default() };
    let b = ring_bbox( &[ LatLon::new( 0.0, 190.0), LatLon::new( 10.0, 200.0)], &config).unwrap();
    assert_bbox_close( &b, [-170.0, 0.0, -160.0, 10.0]);
}

#[test]
fn test_dispatch () {
    let config = ExtentConfig::default();

    // polygons first
    let spatial = CmrSpatial {
        polygons: Some( vec![ strings( &["10 -30 10 30 -10 30 -10 -30", "1 1 1 2 2 2"])]),
        points: Some( strings( &["50 50"])),
        boxes: Some( strings( &["-90 -180 90 180"])),
        ..Default::default()
    };
    assert!( spatial.has_spatial_data());
    let b = cmr_spatial_to_extent( &spatial, &config).unwrap().unwrap();
    assert_bbox_close( &b, [-30.0, -11.508393365822329, 30.0, 11.508393365822329]);

    // then points
    let spatial = CmrSpatial {
        points: Some( strings( &["10 170 20 -170", "-5 175"])),
        lines: Some( strings( &["0 0 1 1"])),
        ..Default::default()
    };
    let b = cmr_spatial_to_extent( &spatial, &config).unwrap().unwrap();
    assert_eq!( b, BoundingBox::new( 170.0, -5.0, -170.0, 20.0));

    // then lines
    let spatial = CmrSpatial {
        lines: Some( strings( &["0 0 1 1", "5 -20 6 -10"])),
        boxes: Some( strings( &["-90 -180 90 180"])),
        ..Default::default()
    };
    let b = cmr_spatial_to_extent( &spatial, &config).unwrap().unwrap();
    assert_eq!( b, BoundingBox::new( -20.0, 0.0, 1.0, 6.0));

    // then boxes
    let spatial = CmrSpatial {
        boxes: Some( strings( &["-10 170 10 180", "-10 -180 10 -170"])),
        ..Default::default()
    };
    let b = cmr_spatial_to_extent( &spatial, &config).unwrap().unwrap();
    assert_eq!( b.to_wsen_array(), [170.0, -10.0, -170.0, 10.0]);

    // empty lists don't count
    let spatial = CmrSpatial {
        polygons: Some( vec![]),
        boxes: Some( strings( &["-10 -20 10 20"])),
        ..Default::default()
    };
    let b = cmr_spatial_to_extent( &spatial, &config).unwrap().unwrap();
    assert_eq!( b, BoundingBox::new( -20.0, -10.0, 20.0, 10.0));
}

#[test]
fn test_multi_polygon () {
    let polygons = vec![
        strings( &["10 170 10 175 5 175"]),
        strings( &["10 -175 10 -170 5 -170"]),
    ];
    let config = ExtentConfig { geodesic_polygons: false, ..ExtentConfig::default() };
    let b = polygons_bbox( &polygons, &config).unwrap().unwrap();
    assert_eq!( b, BoundingBox::new( 170.0, 5.0, -170.0, 10.0));
}

#[test]
fn test_no_spatial_data () {
    init_tracing();
    let spatial = CmrSpatial::default();
    assert!( !spatial.has_spatial_data());

    let b = cmr_spatial_to_extent( &spatial, &ExtentConfig::default()).unwrap();
    assert_eq!( b, Some(WHOLE_WORLD));

    let config = ExtentConfig { whole_world_fallback: false, ..ExtentConfig::default() };
    assert_eq!( cmr_spatial_to_extent( &spatial, &config).unwrap(), None);

    let spatial = CmrSpatial { points: Some( vec![]), ..Default::default() };
    assert_eq!( cmr_spatial_to_extent( &spatial, &ExtentConfig::default()).unwrap(), Some(WHOLE_WORLD));
}

#[test]
fn test_malformed_input () {
    let config = ExtentConfig::default();

    let spatial = CmrSpatial { points: Some( strings( &["10 20 30"])), ..Default::default() };
    assert!( matches!( cmr_spatial_to_extent( &spatial, &config), Err(OdinStacError::OrdinateCount(..))));

    let spatial = CmrSpatial { boxes: Some( strings( &["-10 -20 10"])), ..Default::default() };
    assert!( cmr_spatial_to_extent( &spatial, &config).is_err());

    let spatial = CmrSpatial { boxes: Some( strings( &["10 0 -10 5"])), ..Default::default() };
    assert!( matches!( cmr_spatial_to_extent( &spatial, &config), Err(OdinStacError::InvalidBox(..))));

    let spatial = CmrSpatial { polygons: Some( vec![ strings( &["10 -30 10 x -10 30"])]), ..Default::default() };
    assert!( matches!( cmr_spatial_to_extent( &spatial, &config), Err(OdinStacError::InvalidOrdinate(..))));
}

#[test]
fn test_cmr_spatial_serde () {
    let input = r#"{ "boxes": ["-10 170 10 -170"], "points": null }"#;
    let spatial: CmrSpatial = serde_json::from_str( input).unwrap();
    assert_eq!( spatial.boxes, Some( strings( &["-10 170 10 -170"])));
    assert!( spatial.points.is_none());

    let b = cmr_spatial_to_extent( &spatial, &ExtentConfig::default()).unwrap().unwrap();
    assert_eq!( serde_json::to_string( &b).unwrap(), "[170.0,-10.0,-170.0,10.0]");

    assert_eq!( serde_json::to_string( &CmrSpatial::default()).unwrap(), "{}");
}
