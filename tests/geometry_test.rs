use car_scene::{
    data_structures::model::{Geometry, SceneVertex},
    resources::car,
};
use cgmath::{InnerSpace, Vector3};

fn car_parts() -> [Geometry<'static, SceneVertex>; 5] {
    [
        car::body(),
        car::wheel(),
        car::wheel_glass(),
        car::headlight(),
        car::lamp(),
    ]
}

#[test]
fn should_only_index_existing_vertices() {
    for part in car_parts() {
        assert_eq!(part.out_of_range_index(), None, "{}", part.name);
    }
    assert_eq!(car::rain_drop().out_of_range_index(), None);
}

#[test]
fn should_be_made_of_whole_triangles() {
    for part in car_parts() {
        let count = if part.indices.is_empty() {
            part.vertices.len()
        } else {
            part.indices.len()
        };
        assert_eq!(count % 3, 0, "{}", part.name);
    }
    assert_eq!(car::rain_drop().indices.len() % 3, 0);
}

#[test]
fn should_have_expected_sizes() {
    let body = car::body();
    assert_eq!((body.vertices.len(), body.indices.len()), (44, 120));

    let wheel = car::wheel();
    assert_eq!((wheel.vertices.len(), wheel.indices.len()), (18, 96));

    let headlight = car::headlight();
    assert_eq!((headlight.vertices.len(), headlight.indices.len()), (9, 24));

    let lamp = car::lamp();
    assert_eq!(lamp.vertices.len(), 36);
    assert!(lamp.indices.is_empty(), "the lamp cube is drawn unindexed");

    let drop = car::rain_drop();
    assert_eq!((drop.vertices.len(), drop.indices.len()), (6, 24));
}

#[test]
fn unused_index_lookup_reports_the_offender() {
    let vertices = [car::headlight().vertices[0]; 3];
    let broken = Geometry {
        name: "broken",
        vertices: &vertices,
        indices: &[0, 1, 2, 2, 3, 0],
    };

    assert_eq!(broken.out_of_range_index(), Some(3));
}

#[test]
fn wheel_back_cap_should_fan_around_its_own_centre() {
    let wheel = car::wheel();
    let back_centre = wheel.vertices.len() as u16 - 1;
    let front_centre = wheel.vertices[0].position;
    let back = wheel.vertices[back_centre as usize].position;

    assert_eq!(back[0], front_centre[0]);
    assert_eq!(back[1], front_centre[1]);
    assert!(back[2] < front_centre[2]);

    let back_cap_triangles = wheel
        .indices
        .chunks(3)
        .filter(|triangle| triangle.contains(&back_centre))
        .count();
    assert_eq!(back_cap_triangles, 8);
}

#[test]
fn lamp_cube_should_have_unit_face_normals() {
    for vertex in car::lamp().vertices {
        let normal = Vector3::from(vertex.normal);
        assert!((normal.magnitude() - 1.0).abs() < 1e-6);
        // Every face normal points away from the cube's centre.
        assert!(normal.dot(Vector3::from(vertex.position)) > 0.0);
    }
}

#[test]
fn body_should_request_flat_shading() {
    assert!(
        car::body()
            .vertices
            .iter()
            .all(|vertex| vertex.normal == [0.0; 3])
    );
}
