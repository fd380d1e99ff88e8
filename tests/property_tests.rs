use ndarray::Array2;
use proptest::prelude::*;
use symnmf::{degree_matrix, normalized_similarity, similarity_matrix, SymNmf};

fn to_matrix(data: &[Vec<f64>]) -> Array2<f64> {
    let n = data.len();
    let d = data[0].len();
    let flat: Vec<f64> = data.iter().flatten().copied().collect();
    Array2::from_shape_vec((n, d), flat).unwrap()
}

proptest! {
    #[test]
    fn prop_similarity_symmetric_zero_diagonal(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 3), 2..12)
    ) {
        let points = to_matrix(&data);
        let a = similarity_matrix(&points).unwrap();

        for i in 0..data.len() {
            prop_assert_eq!(a[[i, i]], 0.0);
            for j in 0..data.len() {
                prop_assert!((a[[i, j]] - a[[j, i]]).abs() < 1e-15);
                if i != j {
                    prop_assert!(a[[i, j]] > 0.0 && a[[i, j]] <= 1.0);
                }
            }
        }
    }

    #[test]
    fn prop_degree_is_similarity_row_sum(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 2..10)
    ) {
        let points = to_matrix(&data);
        let a = similarity_matrix(&points).unwrap();
        let d = degree_matrix(&points).unwrap();

        for i in 0..data.len() {
            prop_assert!((d[[i, i]] - a.row(i).sum()).abs() < 1e-12);
            for j in 0..data.len() {
                if i != j {
                    prop_assert_eq!(d[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn prop_normalized_similarity_symmetric(
        data in prop::collection::vec(prop::collection::vec(-10.0f64..10.0, 2), 2..10)
    ) {
        let points = to_matrix(&data);
        let w = normalized_similarity(&points).unwrap();

        for i in 0..data.len() {
            for j in 0..data.len() {
                prop_assert!((w[[i, j]] - w[[j, i]]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn prop_factor_nonnegative_labels_in_range(
        data in prop::collection::vec(prop::collection::vec(-5.0f64..5.0, 2), 4..10),
        k in 1usize..4
    ) {
        let points = to_matrix(&data);
        let fit = SymNmf::new(k).with_seed(42).fit(&points).unwrap();

        for &v in fit.h.iter() {
            prop_assert!(v >= 0.0, "factor entry went negative: {}", v);
        }
        prop_assert!(fit.iterations <= 300);

        let labels = fit.labels();
        prop_assert_eq!(labels.len(), data.len());
        for &l in &labels {
            prop_assert!(l < k);
        }
    }
}
