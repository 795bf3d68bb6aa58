use archmage::prelude::*;

use super::{Decimate, PixelShuffle, gray8_rest, gray16_rest, shuffle_rest};

// ===========================================================================
// Scalar dispatch targets for incant!
// ===========================================================================

pub(super) fn shuffle4_impl_scalar(
    _token: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    sh: PixelShuffle,
) {
    shuffle_rest(src, dst, &sh);
}

pub(super) fn shuffle3_impl_scalar(
    _token: ScalarToken,
    src: &[u8],
    dst: &mut [u8],
    sh: PixelShuffle,
) {
    shuffle_rest(src, dst, &sh);
}

pub(super) fn gray8_impl_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8]) {
    gray8_rest(src, dst);
}

pub(super) fn gray16_impl_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], dec: Decimate) {
    gray16_rest(src, dst, dec);
}
