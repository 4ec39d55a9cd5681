use itertools::izip;

use crate::{
    layouts::{Headroom, LeftShift, Mantissa, RightShift},
    reference::{shift_i64, vect_headroom},
};

/// `res[k] = sat16(a[k] >> a_shr)`.
#[inline(always)]
pub fn vect_s32_to_s16_ref(res: &mut [i16], a: &[i32], a_shr: RightShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| {
        *r = i16::sat_from_i64(shift_i64(x as i64, a_shr));
    });
    vect_headroom(res)
}

/// `res[k] = a[k] << shl`, widening; `shl` must leave the result in range.
#[inline(always)]
pub fn vect_s16_to_s32_ref(res: &mut [i32], a: &[i16], shl: LeftShift) -> Headroom {
    #[cfg(debug_assertions)]
    {
        assert_eq!(res.len(), a.len());
        assert!((0..=16).contains(&shl));
    }
    izip!(res.iter_mut(), a.iter()).for_each(|(r, &x)| *r = (x as i32) << shl);
    vect_headroom(res)
}

#[cfg(test)]
mod tests {
    use crate::reference::{vect_s16_to_s32_ref, vect_s32_to_s16_ref};

    #[test]
    fn narrowing_rounds_and_saturates() {
        let a: [i32; 3] = [0x0001_8000, -0x0001_8000, i32::MAX];
        let mut res: [i16; 3] = [0; 3];
        let hr = vect_s32_to_s16_ref(&mut res, &a, 16);
        assert_eq!(res, [2, -1, i16::MAX]);
        assert_eq!(hr, 0);
    }

    #[test]
    fn widening_shifts_by_eight() {
        let a: [i16; 2] = [i16::MIN, 3];
        let mut res: [i32; 2] = [0; 2];
        let hr = vect_s16_to_s32_ref(&mut res, &a, 8);
        assert_eq!(res, [-(1 << 23), 3 << 8]);
        assert_eq!(hr, 8);
    }
}
