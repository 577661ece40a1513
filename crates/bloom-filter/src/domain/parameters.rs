//! Bloom filter parameter derivation
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- bits in the array
//! - k = (m/n) * ln(2)         -- hash rounds
//!
//! Both quantities are truncated toward zero. A derivation that truncates to
//! zero bits or zero rounds is rejected rather than rounded up.

use std::f64::consts::LN_2;

use bitvec::prelude::*;

use crate::error::FilterError;

/// Largest bit array the filter's storage can hold
pub const MAX_SIZE_BITS: usize = BitSlice::<u64, Lsb0>::MAX_BITS;

/// Parameters derived from an expected item count and a target FPR
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash rounds (k)
    pub hash_count: usize,
    /// Theoretical false positive rate once n items have been added
    pub expected_fpr: f64,
}

/// Untruncated bit-array size for `n_items` at `fp_prob`
pub fn bit_array_size(n_items: f64, fp_prob: f64) -> f64 {
    -(n_items * fp_prob.ln()) / (LN_2 * LN_2)
}

/// Untruncated hash-round count for an array of `size_bits` holding `n_items`
pub fn hash_function_count(size_bits: usize, n_items: f64) -> f64 {
    (size_bits as f64 / n_items) * LN_2
}

/// Validate inputs and derive the filter shape
///
/// # Errors
/// `FilterError::InvalidParameters` when `n_items <= 0`, `fp_prob` is outside
/// the open interval (0, 1), or either derived quantity truncates to zero.
pub fn derive_parameters(n_items: i64, fp_prob: f64) -> Result<BloomFilterParams, FilterError> {
    if n_items <= 0 {
        return Err(FilterError::invalid(format!(
            "n_items must be positive, got {n_items}"
        )));
    }

    // Written so that NaN fails too
    if !(fp_prob > 0.0 && fp_prob < 1.0) {
        return Err(FilterError::invalid(format!(
            "fp_prob must be in (0, 1), got {fp_prob}"
        )));
    }

    let n = n_items as f64;

    let raw_size = bit_array_size(n, fp_prob);
    if !raw_size.is_finite() || raw_size >= MAX_SIZE_BITS as f64 {
        return Err(FilterError::invalid(format!(
            "bit array for {n_items} items at fp_prob {fp_prob} is not addressable"
        )));
    }
    let size_bits = raw_size as usize;
    if size_bits == 0 {
        return Err(FilterError::invalid(format!(
            "{n_items} items at fp_prob {fp_prob} derive a zero-length bit array"
        )));
    }

    let hash_count = hash_function_count(size_bits, n) as usize;
    if hash_count == 0 {
        return Err(FilterError::invalid(format!(
            "{n_items} items at fp_prob {fp_prob} derive zero hash functions \
             ({size_bits} bits)"
        )));
    }

    Ok(BloomFilterParams {
        size_bits,
        hash_count,
        expected_fpr: fpr_for(size_bits as f64, n, hash_count),
    })
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    fpr_for(m as f64, n as f64, k)
}

fn fpr_for(m: f64, n: f64, k: usize) -> f64 {
    if m == 0.0 {
        return 1.0;
    }
    let exponent = -(k as f64) * n / m;
    (1.0 - exponent.exp()).powi(k as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_match_formulas_n1000_fpr005() {
        let params = derive_parameters(1000, 0.05).expect("valid parameters");

        let expected_m = (-(1000.0 * 0.05f64.ln()) / (LN_2 * LN_2)) as usize;
        let expected_k = ((expected_m as f64 / 1000.0) * LN_2) as usize;

        assert_eq!(params.size_bits, expected_m);
        assert_eq!(params.hash_count, expected_k);
        assert!(params.size_bits >= 1);
        assert!(params.hash_count >= 1);
    }

    #[test]
    fn test_truncation_not_rounding() {
        // n=1000, p=0.05 -> m = 6235.2.., k = 4.32..
        let params = derive_parameters(1000, 0.05).unwrap();
        let raw_m = bit_array_size(1000.0, 0.05);
        let raw_k = hash_function_count(params.size_bits, 1000.0);

        assert!(raw_m.fract() > 0.0, "Fixture should have a fractional m");
        assert_eq!(params.size_bits as f64, raw_m.trunc());
        assert_eq!(params.hash_count as f64, raw_k.trunc());
    }

    #[test]
    fn test_rejects_non_positive_items() {
        assert!(matches!(
            derive_parameters(0, 0.05),
            Err(FilterError::InvalidParameters(_))
        ));
        assert!(matches!(
            derive_parameters(-5, 0.05),
            Err(FilterError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_rejects_probability_outside_open_interval() {
        for p in [0.0, -0.1, 1.0, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    derive_parameters(1000, p),
                    Err(FilterError::InvalidParameters(_))
                ),
                "fp_prob {} should be rejected",
                p
            );
        }
    }

    #[test]
    fn test_rejects_zero_length_bit_array() {
        // m = -ln(0.9) / ln(2)^2 = 0.219.. -> 0
        let result = derive_parameters(1, 0.9);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_rejects_zero_hash_count() {
        // m/n <= 1/ln(2) whenever p >= 0.5, so k truncates to 0
        let result = derive_parameters(1000, 0.5);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_rejects_unaddressable_size() {
        let result = derive_parameters(i64::MAX, 1e-300);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_rejects_size_beyond_bit_storage() {
        // m ≈ 6.2e18: fits in usize but not in a BitVec<u64>
        let raw = bit_array_size(1e18, 0.05);
        assert!(raw < usize::MAX as f64 && raw > MAX_SIZE_BITS as f64);

        let result = derive_parameters(1_000_000_000_000_000_000, 0.05);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_accepts_size_at_storage_limit() {
        // Derivation alone does not allocate, so a shape under the cap is fine
        let n = (MAX_SIZE_BITS as f64 * 0.99 / bit_array_size(1.0, 0.05)) as i64;
        let params = derive_parameters(n, 0.05).expect("shape under the cap");
        assert!(params.size_bits <= MAX_SIZE_BITS);
        assert!(params.expected_fpr > 0.0 && params.expected_fpr < 0.1);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_expected_fpr_beyond_u32_item_count() {
        let params = derive_parameters(5_000_000_000, 0.05).unwrap();
        assert!(
            (params.expected_fpr - 0.05).abs() < 0.01,
            "Expected FPR {} should be close to 0.05",
            params.expected_fpr
        );
    }

    #[test]
    fn test_fpr_calculation() {
        // With m=1000, n=100, k=7, FPR should be around 0.008
        let fpr = calculate_fpr(1000, 100, 7);
        assert!(fpr > 0.005 && fpr < 0.02, "Expected FPR≈0.008, got {}", fpr);
    }

    #[test]
    fn test_expected_fpr_near_target() {
        let params = derive_parameters(1000, 0.05).unwrap();
        assert!(
            params.expected_fpr > 0.025 && params.expected_fpr < 0.1,
            "Expected FPR {} should be close to 0.05",
            params.expected_fpr
        );
    }

    #[test]
    fn test_larger_n_needs_more_bits() {
        let params1 = derive_parameters(100, 0.01).unwrap();
        let params2 = derive_parameters(1000, 0.01).unwrap();

        assert!(
            params2.size_bits > params1.size_bits,
            "More elements should need more bits"
        );
    }

    #[test]
    fn test_lower_fpr_needs_more_hashes() {
        let params1 = derive_parameters(100, 0.1).unwrap();
        let params2 = derive_parameters(100, 0.001).unwrap();

        assert!(params2.size_bits > params1.size_bits);
        assert!(params2.hash_count > params1.hash_count);
    }
}
