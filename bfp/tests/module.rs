bfp::bfp_test_suite! {
    mod aligned,
    allocator = bfp::layouts::AlignedAllocator,
    config = bfp::layouts::BfpConfig::default(),
    tests = {
        test_bfp_add_scenario => bfp::test_suite::arith::test_bfp_add_scenario,
        test_bfp_add_sub => bfp::test_suite::arith::test_bfp_add_sub,
        test_bfp_shl => bfp::test_suite::arith::test_bfp_shl,
        test_bfp_use_exponent => bfp::test_suite::arith::test_bfp_use_exponent,
        test_bfp_add_scalar => bfp::test_suite::arith::test_bfp_add_scalar,
        test_bfp_abs_rect_clip => bfp::test_suite::arith::test_bfp_abs_rect_clip,
        test_bfp_elementwise_min_max => bfp::test_suite::arith::test_bfp_elementwise_min_max,
        test_bfp_s32_mul => bfp::test_suite::mul::test_bfp_s32_mul,
        test_bfp_s16_mul => bfp::test_suite::mul::test_bfp_s16_mul,
        test_bfp_mul_minimal_exponent => bfp::test_suite::mul::test_bfp_mul_minimal_exponent,
        test_bfp_scale => bfp::test_suite::mul::test_bfp_scale,
        test_bfp_s32_macc => bfp::test_suite::mul::test_bfp_s32_macc,
        test_bfp_s16_macc => bfp::test_suite::mul::test_bfp_s16_macc,
        test_bfp_sum => bfp::test_suite::reduction::test_bfp_sum,
        test_bfp_dot => bfp::test_suite::reduction::test_bfp_dot,
        test_bfp_energy => bfp::test_suite::reduction::test_bfp_energy,
        test_bfp_mean => bfp::test_suite::reduction::test_bfp_mean,
        test_bfp_max_min => bfp::test_suite::reduction::test_bfp_max_min,
        test_bfp_sqrt => bfp::test_suite::nonlinear::test_bfp_sqrt,
        test_bfp_inverse => bfp::test_suite::nonlinear::test_bfp_inverse,
        test_bfp_complex_s32_add_sub => bfp::test_suite::complex::test_bfp_complex_s32_add_sub,
        test_bfp_complex_s32_mul => bfp::test_suite::complex::test_bfp_complex_s32_mul,
        test_bfp_complex_s32_macc => bfp::test_suite::complex::test_bfp_complex_s32_macc,
        test_bfp_complex_s32_mag => bfp::test_suite::complex::test_bfp_complex_s32_mag,
        test_bfp_complex_s32_shift_conj_energy => bfp::test_suite::complex::test_bfp_complex_s32_shift_conj_energy,
        test_bfp_complex_s16_arith => bfp::test_suite::complex::test_bfp_complex_s16_arith,
        test_bfp_complex_s16_mul => bfp::test_suite::complex::test_bfp_complex_s16_mul,
        test_bfp_complex_s16_macc => bfp::test_suite::complex::test_bfp_complex_s16_macc,
        test_bfp_complex_s16_mag => bfp::test_suite::complex::test_bfp_complex_s16_mag,
        test_bfp_s32_s16_conversions => bfp::test_suite::convert::test_bfp_s32_s16_conversions,
        test_bfp_complex_conversions => bfp::test_suite::convert::test_bfp_complex_conversions,
        test_bfp_complex_make_parts => bfp::test_suite::convert::test_bfp_complex_make_parts,
        test_split_acc_accumulate => bfp::test_suite::split_acc::test_split_acc_accumulate,
        test_split_acc_split_merge => bfp::test_suite::split_acc::test_split_acc_split_merge,
    }
}
