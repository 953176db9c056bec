#![cfg(feature = "std")]

use cmpsort::{
	Algorithm, Chain, Sort1Ext, SortError, compare::Direction, compare::by_key, ndarray::Array1,
	ndarray::ArrayViewMut1, ndarray::arr1, sort_array, sort_array_range, sort_chain,
};
use core::cmp::Ordering;
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

const ALGORITHMS: [Algorithm; 3] = [Algorithm::Insertion, Algorithm::Quick, Algorithm::Merge];

fn ascending(a: &i32, b: &i32) -> Result<Ordering, ()> {
	Ok(a.cmp(b))
}

#[test]
fn test_basic_sort() {
	for algorithm in ALGORITHMS {
		let mut v = [5, 3, 8, 3, 1];
		sort_array(ArrayViewMut1::from(&mut v), 5, algorithm, ascending).unwrap();
		assert_eq!(v, [1, 3, 3, 5, 8], "{algorithm}");
	}
}

#[test]
fn test_stability() {
	let input = [(1, "a"), (1, "b"), (0, "c")];
	let by_first = |a: &(i32, &str), b: &(i32, &str)| Ok::<_, ()>(a.0.cmp(&b.0));

	for algorithm in ALGORITHMS {
		let mut v = input;
		sort_array(ArrayViewMut1::from(&mut v), 3, algorithm, by_first).unwrap();
		assert_eq!(v[0], (0, "c"), "{algorithm}");
		if algorithm.is_stable() {
			assert_eq!(v, [(0, "c"), (1, "a"), (1, "b")], "{algorithm}");
		}
	}
}

#[test]
fn test_chain_sort() {
	let chain = [6, 5, 4, 3, 2, 1].into_iter().collect::<Chain<i32>>();
	let head = sort_chain(chain.into_head(), 6, ascending).unwrap();
	assert_eq!(head.as_ref().map(|node| node.data), Some(1));
	let sorted = Chain::from_head(head);
	assert_eq!(sorted.into_iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_invalid_range() {
	for algorithm in ALGORITHMS {
		let mut v = [5, 3, 8, 3, 1];
		let result = sort_array_range(ArrayViewMut1::from(&mut v), 3..2, algorithm, ascending);
		assert_eq!(
			result,
			Err(SortError::InvalidRange {
				start: 3,
				end: 2,
				len: 5
			})
		);
		assert_eq!(v, [5, 3, 8, 3, 1]);

		let result = sort_array(ArrayViewMut1::from(&mut v), 6, algorithm, ascending);
		assert!(matches!(result, Err(SortError::InvalidRange { .. })));
		assert_eq!(v, [5, 3, 8, 3, 1]);
	}

	let chain = [3, 2, 1].into_iter().collect::<Chain<i32>>();
	let error = sort_chain(chain.into_head(), 4, ascending).unwrap_err();
	let (head, error) = error.into_parts();
	assert_eq!(
		error,
		SortError::InvalidRange {
			start: 0,
			end: 4,
			len: 3
		}
	);
	assert!(Chain::from_head(head).iter().eq(&[3, 2, 1]));
}

#[test]
fn test_long_raw_chain() {
	let chain = (0..1_000_000u32).rev().collect::<Chain<_>>();
	let head = sort_chain(chain.into_head(), 1_000_000, |a: &u32, b: &u32| {
		Ok::<_, ()>(a.cmp(b))
	})
	.unwrap();
	assert_eq!(head.as_ref().map(|node| node.data), Some(0));
	drop(head);

	let chain = (0..1_000_000u32).rev().collect::<Chain<_>>();
	let error = sort_chain(chain.into_head(), 1_000_000, |_: &u32, _: &u32| Err(()))
		.unwrap_err();
	assert_eq!(error.error, SortError::Compare(()));
	assert!(format!("{error:?}").starts_with("ChainError { head: Some(["));
	drop(error);
}

#[test]
fn test_failing_prefix_keeps_rest() {
	let input = [7, 3, 9, 1, 8, 2, 6, 0, 5, 4];
	let chain = input.into_iter().collect::<Chain<i32>>();
	let mut calls = 0;
	let error = sort_chain(chain.into_head(), 6, |a: &i32, b: &i32| {
		calls += 1;
		if calls == 4 { Err("gave up") } else { Ok(a.cmp(b)) }
	})
	.unwrap_err();
	let (head, error) = error.into_parts();
	assert_eq!(error, SortError::Compare("gave up"));

	let chain = Chain::from_head(head);
	assert_eq!(chain.len(), input.len());
	let elements = chain.into_iter().collect::<Vec<_>>();
	// The nodes behind the sorted prefix stay in place.
	assert_eq!(elements[6..], input[6..]);
	let mut elements = elements;
	elements.sort();
	assert_eq!(elements, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_sub_ranges() {
	for algorithm in ALGORITHMS {
		let mut v = [9, 7, 5, 3, 1, 8, 6];
		sort_array_range(ArrayViewMut1::from(&mut v), 1..5, algorithm, ascending).unwrap();
		assert_eq!(v, [9, 1, 3, 5, 7, 8, 6], "{algorithm}");

		// `first == last + 1` is the empty range.
		sort_array_range(ArrayViewMut1::from(&mut v), 2..2, algorithm, ascending).unwrap();
		assert_eq!(v, [9, 1, 3, 5, 7, 8, 6], "{algorithm}");
	}

	let chain = [4, 1, 3, 9, 0].into_iter().collect::<Chain<i32>>();
	let head = sort_chain(chain.into_head(), 3, ascending).unwrap();
	assert!(Chain::from_head(head).iter().eq(&[1, 3, 4, 9, 0]));
}

#[test]
fn test_trivial_lengths() {
	for algorithm in ALGORITHMS {
		let mut empty: [i32; 0] = [];
		sort_array(ArrayViewMut1::from(&mut empty), 0, algorithm, |_: &i32, _: &i32| {
			Err("must not compare")
		})
		.unwrap();

		let mut single = [7];
		sort_array(ArrayViewMut1::from(&mut single), 1, algorithm, |_: &i32, _: &i32| {
			Err("must not compare")
		})
		.unwrap();
		assert_eq!(single, [7]);
	}

	let head = sort_chain(None, 0, |_: &i32, _: &i32| Err("must not compare")).unwrap();
	assert!(head.is_none());
}

#[test]
fn test_failing_ordering() {
	let mut rng = StdRng::seed_from_u64(445);
	let input = (0..500).map(|_| rng.random_range(0..100)).collect::<Vec<i32>>();
	let mut expected = input.clone();
	expected.sort();

	for algorithm in ALGORITHMS {
		let mut calls = 0;
		let mut v = input.clone();
		let result = sort_array(
			ArrayViewMut1::from(&mut v),
			input.len(),
			algorithm,
			|a: &i32, b: &i32| {
				calls += 1;
				if calls > 300 { Err(calls) } else { Ok(a.cmp(b)) }
			},
		);
		assert_eq!(result, Err(SortError::Compare(301)), "{algorithm}");
		v.sort();
		assert_eq!(v, expected, "{algorithm}");
	}

	let mut calls = 0;
	let mut chain = input.iter().copied().collect::<Chain<i32>>();
	let result = chain.try_sort_by(|a, b| {
		calls += 1;
		if calls > 300 { Err(calls) } else { Ok(a.cmp(b)) }
	});
	assert_eq!(result, Err(SortError::Compare(301)));
	assert_eq!(chain.len(), input.len());
	let mut v = chain.into_iter().collect::<Vec<_>>();
	v.sort();
	assert_eq!(v, expected);
}

#[test]
fn test_fuzz_random() {
	let mut rng = rand::rng();

	for _ in 0..1_000 {
		let len = rng.random_range(0..200);
		let input = (0..len)
			.map(|_| rng.random_range(-50..50))
			.collect::<Vec<i32>>();
		let mut expected = input.clone();
		expected.sort();

		let mut v = Array1::from_vec(input.clone());
		v.quick_sort();
		assert_eq!(v.to_vec(), expected);

		let mut v = Array1::from_vec(input.clone());
		v.merge_sort();
		assert_eq!(v.to_vec(), expected);

		let mut v = Array1::from_vec(input.clone());
		v.insertion_sort();
		assert_eq!(v.to_vec(), expected);

		let mut chain = input.into_iter().collect::<Chain<_>>();
		chain.sort();
		assert!(chain.iter().eq(&expected));
	}
}

#[test]
fn test_fuzz_stability() {
	let mut rng = StdRng::seed_from_u64(42);

	for _ in 0..200 {
		let len = rng.random_range(0..300);
		let input = (0..len)
			.map(|index| (rng.random_range(0..8u8), index))
			.collect::<Vec<(u8, usize)>>();
		// The standard library's sort is stable.
		let mut expected = input.clone();
		expected.sort_by_key(|&(key, _)| key);

		let mut v = Array1::from_vec(input.clone());
		v.merge_sort_by_key(|&(key, _)| key);
		assert_eq!(v.to_vec(), expected);

		let mut v = Array1::from_vec(input.clone());
		v.insertion_sort_by_key(|&(key, _)| key);
		assert_eq!(v.to_vec(), expected);

		let mut chain = input.into_iter().collect::<Chain<_>>();
		chain.sort_by_key(|&(key, _)| key);
		assert!(chain.iter().eq(&expected));
	}
}

#[test]
fn test_idempotence() {
	let sorted = (0..1000).collect::<Vec<i32>>();
	for algorithm in ALGORITHMS {
		let mut v = sorted.clone();
		sort_array(ArrayViewMut1::from(&mut v), 1000, algorithm, ascending).unwrap();
		sort_array(ArrayViewMut1::from(&mut v), 1000, algorithm, ascending).unwrap();
		assert_eq!(v, sorted, "{algorithm}");
	}

	let mut calls = 0;
	let mut v = Array1::from_vec(sorted.clone());
	v.merge_sort_by(|a, b| {
		calls += 1;
		a.cmp(b)
	});
	assert_eq!(calls, 999);
}

#[test]
fn test_descending_accessor() {
	#[derive(Debug, Clone, PartialEq)]
	struct Worker {
		name: &'static str,
		salary: u32,
	}

	let staff = [
		Worker {
			name: "Cy",
			salary: 20,
		},
		Worker {
			name: "Ann",
			salary: 30,
		},
		Worker {
			name: "Bo",
			salary: 20,
		},
	];

	let mut v = arr1(&staff);
	v.merge_sort_by(by_key(|w: &Worker| w.salary, Direction::Descending));
	let names = v.iter().map(|w| w.name).collect::<Vec<_>>();
	assert_eq!(names, ["Ann", "Cy", "Bo"]);

	let mut chain = staff.into_iter().collect::<Chain<_>>();
	chain.sort_by(by_key(|w: &Worker| w.name, Direction::Ascending));
	let names = chain.iter().map(|w| w.name).collect::<Vec<_>>();
	assert_eq!(names, ["Ann", "Bo", "Cy"]);
}

#[test]
fn test_non_contiguous_view() {
	let mut v = Array1::from_iter((0..40).rev());
	let mut odd = v.slice_mut(cmpsort::ndarray::s![1..;2]);
	odd.quick_sort();
	assert!(odd.iter().zip(odd.iter().skip(1)).all(|(a, b)| a <= b));
	assert!(v.iter().step_by(2).copied().eq((0..40).rev().step_by(2)));
}
