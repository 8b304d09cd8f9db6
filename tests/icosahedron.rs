use approx::assert_relative_eq;
use icoglobe::prelude::*;
use icoglobe::procedural::utils;
use std::collections::HashSet;

const RADII: [f32; 5] = [1.0e-3, 0.5, 1.0, 2.0, 1000.0];

#[test]
fn counts() {
    for r in RADII {
        let mesh = icosahedron(r).unwrap();

        assert_eq!(mesh.num_vertices(), 12);
        assert_eq!(mesh.normals().len(), 12);
        assert_eq!(mesh.uvs().len(), 12);
        assert_eq!(mesh.num_triangles(), 20);
        assert_eq!(mesh.flat_indices().len(), 60);
        assert_eq!(mesh.vertices().len(), 12);
    }
}

#[test]
fn vertices_lie_at_radius() {
    for r in RADII {
        let mesh = icosahedron(r).unwrap();

        for c in mesh.coords() {
            assert_relative_eq!(c.length(), r, max_relative = 1.0e-5);
        }
    }
}

#[test]
fn normals_are_normalized_positions() {
    for r in RADII {
        let mesh = icosahedron(r).unwrap();

        for (c, n) in mesh.coords().iter().zip(mesh.normals()) {
            let expected = c.normalize();
            assert_relative_eq!(n.length(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(n.x, expected.x, epsilon = 1.0e-5);
            assert_relative_eq!(n.y, expected.y, epsilon = 1.0e-5);
            assert_relative_eq!(n.z, expected.z, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn indices_are_in_range() {
    let mesh = icosahedron(1.0).unwrap();
    assert!(mesh.flat_indices().iter().all(|i| *i < 12));
}

#[test]
fn closed_two_manifold() {
    let mesh = icosahedron(1.0).unwrap();

    assert_eq!(utils::vertex_valences(12, mesh.indices()), vec![5; 12]);

    let edges = utils::edge_face_counts(mesh.indices());
    assert_eq!(edges.len(), 30);
    assert!(edges.values().all(|n| *n == 2));
    assert!(utils::is_closed_manifold(mesh.indices()));

    let distinct: HashSet<[u32; 3]> = mesh
        .indices()
        .iter()
        .map(|f| {
            let mut f = *f;
            f.sort_unstable();
            f
        })
        .collect();
    assert_eq!(distinct.len(), 20);
}

#[test]
fn deterministic() {
    assert_eq!(icosahedron(1.7).unwrap(), icosahedron(1.7).unwrap());
}

#[test]
fn scaling_law() {
    let r = 0.8;
    let small = icosahedron(r).unwrap();
    let big = icosahedron(2.0 * r).unwrap();

    for (a, b) in small.coords().iter().zip(big.coords()) {
        assert_eq!(*a * 2.0, *b);
    }
    assert_eq!(small.normals(), big.normals());
    assert_eq!(small.indices(), big.indices());
}

#[test]
fn unit_radius_scenario() {
    let mesh = icosahedron(1.0).unwrap();

    assert_eq!(mesh.coords()[0], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.coords()[11], Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(mesh.normals()[0], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(mesh.indices()[0], [0, 1, 2]);
    assert_eq!(mesh.indices(), &icoglobe::procedural::ICOSAHEDRON_FACES[..]);
    assert_eq!(mesh, unit_icosahedron());
}

#[test]
fn rejects_invalid_radii() {
    for r in [
        0.0,
        -0.0,
        -1.0,
        1.0e-44,
        f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
    ] {
        match icosahedron(r) {
            Err(ProceduralError::InvalidRadius(_)) => {}
            other => panic!("radius {} should be rejected, got {:?}", r, other),
        }
    }
}

#[test]
fn rescaling_cannot_turn_the_globe_inside_out() {
    let mesh = icosahedron(1.0).unwrap();

    for s in [-1.0, 0.0, f32::NAN] {
        assert!(mesh.scaled(s).is_err(), "factor {} should be rejected", s);
    }

    let bigger = mesh.scaled(2.0).unwrap();
    assert_eq!(bigger, icosahedron(2.0).unwrap());
}

#[test]
fn usable_from_several_threads() {
    let handles: Vec<_> = (1..=4)
        .map(|i| std::thread::spawn(move || icosahedron(i as f32).unwrap()))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let mesh = handle.join().unwrap();
        assert_relative_eq!(mesh.coords()[0].x, (i + 1) as f32);
    }
}
