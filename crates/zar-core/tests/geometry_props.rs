//! Property tests over every die mesh.

use proptest::prelude::*;
use zar_core::{DieType, build, build_faces};

fn any_die() -> impl Strategy<Value = DieType> {
    prop::sample::select(DieType::ALL.to_vec())
}

proptest! {
    #[test]
    fn build_is_deterministic(die in any_die()) {
        prop_assert_eq!(build(die), build(die));
    }

    #[test]
    fn every_vertex_is_used(die in any_die()) {
        let mesh = build(die);
        let mut used = vec![false; mesh.vertices().len()];
        for face in mesh.faces() {
            for &i in face {
                used[i as usize] = true;
            }
        }
        prop_assert!(used.into_iter().all(|u| u));
    }

    #[test]
    fn mesh_is_roughly_unit_sized(die in any_die()) {
        // The d10's golden-ratio vertices sit at radius sqrt((1 + phi^2) / 3).
        let r = build(die).bounding_radius();
        prop_assert!(r > 0.5);
        prop_assert!(r < 1.1);
    }

    #[test]
    fn unsupported_face_counts_fail(faces in any::<u32>()) {
        let supported = [4, 6, 8, 10, 12, 20].contains(&faces);
        prop_assert_eq!(build_faces(faces).is_ok(), supported);
    }
}
