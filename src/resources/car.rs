//! Hand-authored geometry of the car, the lamp cube and the rain drop.
//!
//! The car faces +Z: the front bumper sits at z = 0 and the cabin reaches back
//! to z = -1.5. A zero normal means "flat shade from the triangle", which is
//! what the body and the wheels use since their corner vertices are shared by
//! several faces.

use crate::data_structures::model::{Geometry, SceneVertex, ShapeVertex};

const fn v(position: [f32; 3], color: [f32; 3], tex_coords: [f32; 2]) -> SceneVertex {
    SceneVertex::new(position, color, tex_coords, [0.0; 3])
}

const fn vn(
    position: [f32; 3],
    color: [f32; 3],
    tex_coords: [f32; 2],
    normal: [f32; 3],
) -> SceneVertex {
    SceneVertex::new(position, color, tex_coords, normal)
}

const PAINT: [f32; 3] = [1.0, 1.0, 1.0];
const GLASS: [f32; 3] = [0.77, 1.0, 1.0];
const RUBBER: [f32; 3] = [0.0, 0.0, 0.0];
const LAMP_YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const FACING_FRONT: [f32; 3] = [0.0, 0.0, 1.0];

#[rustfmt::skip]
pub const BODY_VERTICES: [SceneVertex; 44] = [
    // chassis front face
    v([-0.5, -0.7,  0.0], PAINT, [0.0, 0.0]),
    v([ 0.5, -0.7,  0.0], PAINT, [1.0, 0.0]),
    v([-0.5, -0.2,  0.0], PAINT, [0.0, 1.0]),
    v([ 0.5, -0.2,  0.0], PAINT, [1.0, 1.0]),
    // bonnet rear edge
    v([ 0.5, -0.7, -0.5], PAINT, [0.0, 1.0]),
    v([ 0.5, -0.2, -0.5], PAINT, [0.0, 0.0]),
    v([-0.5, -0.2, -0.5], PAINT, [1.0, 0.0]),
    v([-0.5, -0.7, -0.5], PAINT, [1.0, 1.0]),
    // roof
    v([ 0.5,  0.2, -0.65], PAINT, [0.0, 1.0]),
    v([-0.5,  0.2, -0.65], PAINT, [1.0, 1.0]),
    v([-0.5,  0.2, -1.5], PAINT, [0.0, 1.0]),
    v([ 0.5,  0.2, -1.5], PAINT, [1.0, 1.0]),
    // rear bottom
    v([ 0.5, -0.7, -1.5], PAINT, [1.0, 1.0]),
    v([-0.5, -0.7, -1.5], PAINT, [0.0, 1.0]),
    // windshield
    v([ 0.45, -0.2,  -0.499], GLASS, [0.0, 0.0]),
    v([-0.45, -0.2,  -0.499], GLASS, [0.0, 1.0]),
    v([ 0.45,  0.15, -0.63], GLASS, [1.0, 1.0]),
    v([-0.45,  0.15, -0.63], GLASS, [1.0, 0.0]),
    // rear belt line
    v([ 0.5, -0.2, -1.5], PAINT, [1.0, 0.0]),
    v([-0.5, -0.2, -1.5], PAINT, [0.0, 0.0]),
    // right side windows
    v([ 0.501,  0.15, -0.7], GLASS, [0.0, 0.0]),
    v([ 0.501,  0.15, -1.0], GLASS, [0.0, 0.0]),
    v([ 0.501, -0.15, -0.6], GLASS, [0.0, 0.0]),
    v([ 0.501, -0.15, -1.0], GLASS, [0.0, 0.0]),
    v([ 0.501,  0.15, -1.1], GLASS, [0.0, 0.0]),
    v([ 0.501,  0.15, -1.45], GLASS, [0.0, 0.0]),
    v([ 0.501, -0.15, -1.1], GLASS, [0.0, 0.0]),
    v([ 0.501, -0.15, -1.45], GLASS, [0.0, 0.0]),
    // left side windows
    v([-0.501,  0.15, -0.7], GLASS, [0.0, 0.0]),
    v([-0.501,  0.15, -1.0], GLASS, [0.0, 0.0]),
    v([-0.501, -0.15, -0.6], GLASS, [0.0, 0.0]),
    v([-0.501, -0.15, -1.0], GLASS, [0.0, 0.0]),
    v([-0.501,  0.15, -1.1], GLASS, [0.0, 0.0]),
    v([-0.501,  0.15, -1.45], GLASS, [0.0, 0.0]),
    v([-0.501, -0.15, -1.1], GLASS, [0.0, 0.0]),
    v([-0.501, -0.15, -1.45], GLASS, [0.0, 0.0]),
    // rear window
    v([-0.45,  0.15, -1.501], GLASS, [0.0, 0.0]),
    v([ 0.45,  0.15, -1.501], GLASS, [0.0, 0.0]),
    v([ 0.45, -0.2,  -1.501], GLASS, [0.0, 0.0]),
    v([-0.45, -0.2,  -1.501], GLASS, [0.0, 0.0]),
    // grille
    v([-0.4, -0.425, 0.01], RUBBER, [0.0, 0.0]),
    v([ 0.4, -0.425, 0.01], RUBBER, [1.0, 0.0]),
    v([-0.4, -0.25,  0.01], RUBBER, [0.0, 1.0]),
    v([ 0.4, -0.25,  0.01], RUBBER, [1.0, 1.0]),
];

#[rustfmt::skip]
pub const BODY_INDICES: [u16; 120] = [
    0, 1, 2,    1, 2, 3,
    1, 3, 4,    3, 4, 5,
    2, 3, 6,    3, 5, 6,
    0, 2, 7,    2, 7, 6,
    0, 1, 7,    1, 4, 7,
    6, 5, 8,    6, 8, 9,
    8, 9, 10,   8, 10, 11,
    5, 8, 18,   8, 11, 18,
    4, 5, 12,   5, 12, 18,
    10, 13, 12, 10, 11, 12,
    9, 10, 19,  6, 9, 19,
    6, 7, 13,   6, 13, 19,
    7, 4, 13,   13, 12, 4,
    14, 15, 17, 14, 17, 16,
    20, 21, 22, 22, 23, 21,
    24, 25, 26, 26, 27, 25,
    28, 29, 30, 30, 31, 29,
    32, 33, 34, 34, 35, 33,
    36, 37, 38, 38, 39, 36,
    40, 41, 42, 41, 42, 43,
];

/// Centre of every disc-shaped part (wheel, hub, headlight) in its local xy plane.
const DISC_CENTRE: [f32; 2] = [0.4, 0.4];

/// The eight rim points shared by the wheel, the hub glass and the headlight,
/// clockwise from the top in screen terms.
#[rustfmt::skip]
const DISC_RIM: [[f32; 2]; 8] = [
    [0.4,   0.01],
    [0.675, 0.125],
    [0.79,  0.4],
    [0.675, 0.675],
    [0.4,   0.79],
    [0.125, 0.675],
    [0.001, 0.4],
    [0.125, 0.125],
];

/// Thickness of a wheel along its local -Z.
const WHEEL_WIDTH: f32 = 0.3;

const fn disc_vertex(
    point: [f32; 2],
    z: f32,
    color: [f32; 3],
    normal: [f32; 3],
) -> SceneVertex {
    vn([point[0], point[1], z], color, [0.0, 0.0], normal)
}

const fn wheel_vertex(point: [f32; 2], z: f32) -> SceneVertex {
    v([point[0], point[1], z], RUBBER, [0.0, 0.0])
}

#[rustfmt::skip]
pub const WHEEL_VERTICES: [SceneVertex; 18] = [
    wheel_vertex(DISC_CENTRE, 0.0),
    wheel_vertex(DISC_RIM[0], 0.0),
    wheel_vertex(DISC_RIM[1], 0.0),
    wheel_vertex(DISC_RIM[2], 0.0),
    wheel_vertex(DISC_RIM[3], 0.0),
    wheel_vertex(DISC_RIM[4], 0.0),
    wheel_vertex(DISC_RIM[5], 0.0),
    wheel_vertex(DISC_RIM[6], 0.0),
    wheel_vertex(DISC_RIM[7], 0.0),
    wheel_vertex(DISC_RIM[0], -WHEEL_WIDTH),
    wheel_vertex(DISC_RIM[1], -WHEEL_WIDTH),
    wheel_vertex(DISC_RIM[2], -WHEEL_WIDTH),
    wheel_vertex(DISC_RIM[3], -WHEEL_WIDTH),
    wheel_vertex(DISC_RIM[4], -WHEEL_WIDTH),
    wheel_vertex(DISC_RIM[5], -WHEEL_WIDTH),
    wheel_vertex(DISC_RIM[6], -WHEEL_WIDTH),
    wheel_vertex(DISC_RIM[7], -WHEEL_WIDTH),
    wheel_vertex(DISC_CENTRE, -WHEEL_WIDTH),
];

#[rustfmt::skip]
pub const WHEEL_INDICES: [u16; 96] = [
    // front cap
    0, 1, 2,   0, 2, 3,   0, 3, 4,   0, 4, 5,
    0, 5, 6,   0, 6, 7,   0, 7, 8,   0, 8, 1,
    // tread
    1, 2, 9,   2, 9, 10,  2, 3, 10,  3, 10, 11,
    3, 4, 11,  4, 11, 12, 4, 5, 12,  5, 12, 13,
    5, 6, 13,  6, 13, 14, 6, 7, 14,  7, 14, 15,
    7, 8, 15,  8, 15, 16, 8, 1, 16,  1, 16, 9,
    // back cap
    17, 9, 10,  17, 10, 11, 17, 11, 12, 17, 12, 13,
    17, 13, 14, 17, 14, 15, 17, 15, 16, 17, 16, 9,
];

/// Hub points, slightly in front of the glass disc.
#[rustfmt::skip]
const HUB_POINTS: [[f32; 2]; 8] = [
    [0.24,  0.24],
    [0.4,   0.165],
    [0.585, 0.215],
    [0.63,  0.4],
    [0.55,  0.55],
    [0.4,   0.62],
    [0.26,  0.54],
    [0.18,  0.4],
];

#[rustfmt::skip]
pub const WHEEL_GLASS_VERTICES: [SceneVertex; 17] = [
    disc_vertex(DISC_CENTRE, 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[0], 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[1], 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[2], 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[3], 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[4], 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[5], 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[6], 0.0, PAINT, FACING_FRONT),
    disc_vertex(DISC_RIM[7], 0.0, PAINT, FACING_FRONT),
    disc_vertex(HUB_POINTS[0], 0.01, RUBBER, FACING_FRONT),
    disc_vertex(HUB_POINTS[1], 0.01, RUBBER, FACING_FRONT),
    disc_vertex(HUB_POINTS[2], 0.01, RUBBER, FACING_FRONT),
    disc_vertex(HUB_POINTS[3], 0.01, RUBBER, FACING_FRONT),
    disc_vertex(HUB_POINTS[4], 0.01, RUBBER, FACING_FRONT),
    disc_vertex(HUB_POINTS[5], 0.01, RUBBER, FACING_FRONT),
    disc_vertex(HUB_POINTS[6], 0.01, RUBBER, FACING_FRONT),
    disc_vertex(HUB_POINTS[7], 0.01, RUBBER, FACING_FRONT),
];

#[rustfmt::skip]
pub const WHEEL_GLASS_INDICES: [u16; 36] = [
    0, 1, 2,   0, 2, 3,   0, 3, 4,   0, 4, 5,
    0, 5, 6,   0, 6, 7,   0, 7, 8,   0, 8, 1,
    // spokes
    0, 9, 10,  0, 11, 12, 0, 13, 14, 0, 15, 16,
];

#[rustfmt::skip]
pub const HEADLIGHT_VERTICES: [SceneVertex; 9] = [
    disc_vertex(DISC_CENTRE, 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[0], 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[1], 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[2], 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[3], 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[4], 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[5], 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[6], 0.0, LAMP_YELLOW, FACING_FRONT),
    disc_vertex(DISC_RIM[7], 0.0, LAMP_YELLOW, FACING_FRONT),
];

#[rustfmt::skip]
pub const HEADLIGHT_INDICES: [u16; 24] = [
    0, 1, 2,   0, 2, 3,   0, 3, 4,   0, 4, 5,
    0, 5, 6,   0, 6, 7,   0, 7, 8,   0, 8, 1,
];

const fn cube(position: [f32; 3], normal: [f32; 3]) -> SceneVertex {
    vn(position, PAINT, [0.0, 0.0], normal)
}

/// Unit cube centred on the origin, two triangles per face, unindexed.
#[rustfmt::skip]
pub const LAMP_VERTICES: [SceneVertex; 36] = [
    cube([-0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0]),
    cube([ 0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0]),
    cube([ 0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0]),
    cube([ 0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0]),
    cube([-0.5,  0.5, -0.5], [ 0.0,  0.0, -1.0]),
    cube([-0.5, -0.5, -0.5], [ 0.0,  0.0, -1.0]),

    cube([-0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0]),
    cube([ 0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0]),
    cube([ 0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0]),
    cube([ 0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0]),
    cube([-0.5,  0.5,  0.5], [ 0.0,  0.0,  1.0]),
    cube([-0.5, -0.5,  0.5], [ 0.0,  0.0,  1.0]),

    cube([-0.5,  0.5,  0.5], [-1.0,  0.0,  0.0]),
    cube([-0.5,  0.5, -0.5], [-1.0,  0.0,  0.0]),
    cube([-0.5, -0.5, -0.5], [-1.0,  0.0,  0.0]),
    cube([-0.5, -0.5, -0.5], [-1.0,  0.0,  0.0]),
    cube([-0.5, -0.5,  0.5], [-1.0,  0.0,  0.0]),
    cube([-0.5,  0.5,  0.5], [-1.0,  0.0,  0.0]),

    cube([ 0.5,  0.5,  0.5], [ 1.0,  0.0,  0.0]),
    cube([ 0.5,  0.5, -0.5], [ 1.0,  0.0,  0.0]),
    cube([ 0.5, -0.5, -0.5], [ 1.0,  0.0,  0.0]),
    cube([ 0.5, -0.5, -0.5], [ 1.0,  0.0,  0.0]),
    cube([ 0.5, -0.5,  0.5], [ 1.0,  0.0,  0.0]),
    cube([ 0.5,  0.5,  0.5], [ 1.0,  0.0,  0.0]),

    cube([-0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0]),
    cube([ 0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0]),
    cube([ 0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0]),
    cube([ 0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0]),
    cube([-0.5, -0.5,  0.5], [ 0.0, -1.0,  0.0]),
    cube([-0.5, -0.5, -0.5], [ 0.0, -1.0,  0.0]),

    cube([-0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0]),
    cube([ 0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0]),
    cube([ 0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0]),
    cube([ 0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0]),
    cube([-0.5,  0.5,  0.5], [ 0.0,  1.0,  0.0]),
    cube([-0.5,  0.5, -0.5], [ 0.0,  1.0,  0.0]),
];

/// Triangular prism every rain drop and smoke puff is drawn as.
#[rustfmt::skip]
pub const DROP_VERTICES: [ShapeVertex; 6] = [
    ShapeVertex { position: [-0.5, -0.5, 0.0] },
    ShapeVertex { position: [ 0.5, -0.5, 0.0] },
    ShapeVertex { position: [ 0.0,  0.5, 0.0] },
    ShapeVertex { position: [-0.5, -0.5, 0.5] },
    ShapeVertex { position: [ 0.5, -0.5, 0.5] },
    ShapeVertex { position: [ 0.0,  0.5, 0.5] },
];

#[rustfmt::skip]
pub const DROP_INDICES: [u16; 24] = [
    0, 1, 2,
    3, 4, 5,
    0, 3, 2,
    2, 5, 3,
    0, 3, 1,
    1, 4, 3,
    2, 5, 1,
    1, 4, 5,
];

pub fn body() -> Geometry<'static, SceneVertex> {
    Geometry {
        name: "Car body",
        vertices: &BODY_VERTICES,
        indices: &BODY_INDICES,
    }
}

pub fn wheel() -> Geometry<'static, SceneVertex> {
    Geometry {
        name: "Wheel",
        vertices: &WHEEL_VERTICES,
        indices: &WHEEL_INDICES,
    }
}

pub fn wheel_glass() -> Geometry<'static, SceneVertex> {
    Geometry {
        name: "Wheel glass",
        vertices: &WHEEL_GLASS_VERTICES,
        indices: &WHEEL_GLASS_INDICES,
    }
}

pub fn headlight() -> Geometry<'static, SceneVertex> {
    Geometry {
        name: "Headlight",
        vertices: &HEADLIGHT_VERTICES,
        indices: &HEADLIGHT_INDICES,
    }
}

pub fn lamp() -> Geometry<'static, SceneVertex> {
    Geometry {
        name: "Lamp",
        vertices: &LAMP_VERTICES,
        indices: &[],
    }
}

pub fn rain_drop() -> Geometry<'static, ShapeVertex> {
    Geometry {
        name: "Drop",
        vertices: &DROP_VERTICES,
        indices: &DROP_INDICES,
    }
}
