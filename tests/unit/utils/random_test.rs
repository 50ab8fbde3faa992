use super::*;

#[test]
fn can_produce_values_within_range() {
    let random = DefaultRandom::default();

    for _ in 0..100 {
        let value = random.uniform_int(3, 10);
        assert!((3..=10).contains(&value));

        let value = random.uniform_real(0., 1.);
        assert!((0. ..1.).contains(&value));
    }

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
}

#[test]
fn can_handle_probability_extremes() {
    let random = DefaultRandom::default();

    assert!(random.is_hit(1.));
    assert!(!random.is_hit(0.));
}

#[test]
fn can_replay_sequence_with_same_seed() {
    let first = DefaultRandom::new_with_seed(123);
    let second = DefaultRandom::new_with_seed(123);

    let first_values = (0..32).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();
    let second_values = (0..32).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_eq!(first_values, second_values);
}

#[test]
fn can_produce_different_sequences_for_different_seeds() {
    let first = DefaultRandom::new_with_seed(1);
    let second = DefaultRandom::new_with_seed(2);

    let first_values = (0..32).map(|_| first.uniform_int(0, 1000)).collect::<Vec<_>>();
    let second_values = (0..32).map(|_| second.uniform_int(0, 1000)).collect::<Vec<_>>();

    assert_ne!(first_values, second_values);
}
