pub mod buffer;
pub mod general;



#[cfg(test)]
mod scenario_tests {
    use crate::buffer::{FloatRingBuffer, IntRingBuffer};

    #[test]
    fn test_seeded_window() {
        let mut rng = fastrand::Rng::with_seed(0);
        let vals: Vec<i32> = (0..125).map(|_| rng.i32(0..=100)).collect();

        let mut x = IntRingBuffer::new(100).unwrap();
        for &val in vals.iter() {
            x.push(val);
        }
        assert_eq!(x.len(), 100);
        assert_eq!(x.get_at(5).unwrap(), vals[30]);
        assert_eq!(x.to_vec(), vals[25..].to_vec());

        // remove the maximum by its time index
        let max_before = x.max();
        let time_idx = x.argmax_time_idx().unwrap();
        assert_eq!(x.get_at(time_idx).unwrap(), max_before);
        assert_eq!(x.remove_at_time_idx(time_idx).unwrap(), max_before);
        assert_eq!(x.len(), 99);

        let mut expected = vals[25..].to_vec();
        expected.remove(time_idx);
        assert_eq!(x.to_vec(), expected);

        let no_max = vals[25..].iter().filter(|&&val| val == max_before).count();
        if no_max > 1 {
            assert_eq!(x.max(), max_before);
        } else {
            assert!(x.max() < max_before);
        }
    }

    #[test]
    fn test_seeded_window_float() {
        let mut rng = fastrand::Rng::with_seed(0);
        let vals: Vec<f32> = (0..40).map(|_| rng.f32() * 100.0).collect();

        let mut x = FloatRingBuffer::new(16).unwrap();
        for &val in vals.iter() {
            x.push(val);
        }
        for time_idx in 0..x.len() {
            assert_eq!(x.get_at(time_idx).unwrap(), vals[24 + time_idx]);
        }

        let time_idx = x.argmin_time_idx().unwrap();
        let min_before = x.min();
        x.remove_at_time_idx(time_idx).unwrap();
        assert_eq!(x.len(), 15);
        assert!(x.min() >= min_before);
    }
}
