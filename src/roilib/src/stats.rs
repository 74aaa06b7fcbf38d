// Statistics

pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn variance(data: &[f64]) -> f64 {
    let n = data.len() as f64;
    let xbar = mean(data);
    let sumsq: f64 = data.iter().map(|x| (x - xbar).powi(2)).sum();
    sumsq / (n - 1.0)
}

pub fn std_dev(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

pub fn percentile(data: &[f64], q: f64) -> f64 {
    // Linear interpolation between closest ranks
    let mut samples = data.to_vec();
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = samples.len();
    match n {
        0 => f64::NAN,
        1 => samples[0],
        _ => {
            let rank = q / 100.0 * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            samples[lo] + (samples[hi] - samples[lo]) * (rank - lo as f64)
        },
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_variance() {
        let data = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&data), 5.0);
        assert!((variance(&data) - 32.0 / 7.0).abs() < 1e-12);
        assert!((std_dev(&data) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn percentile_interpolates() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(percentile(&data, 0.0), 1.0);
        assert_eq!(percentile(&data, 100.0), 4.0);
        assert_eq!(percentile(&data, 50.0), 2.5);
        // rank = 0.05 * 3 = 0.15
        assert!((percentile(&data, 5.0) - 1.15).abs() < 1e-12);
    }

    #[test]
    fn percentile_unsorted_input() {
        let data = vec![9.0, 1.0, 5.0];
        assert_eq!(percentile(&data, 50.0), 5.0);
    }

    #[test]
    fn percentile_degenerate() {
        assert!(percentile(&[], 50.0).is_nan());
        assert_eq!(percentile(&[3.0], 95.0), 3.0);
    }
}
