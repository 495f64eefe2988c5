// SPDX-License-Identifier: MIT

use primitive_types::U256;
use static_assertions::const_assert_eq;

use super::logexpmath::{MAX_PRECISION, MIN_PRECISION};

// These tables are generated offline by `math::generator` and must stay bit-identical to the deployed formula.
// Changing MIN_PRECISION, MAX_PRECISION or the number of series terms requires regenerating the exp tables.

pub const NUM_OF_EXP_COEFFICIENTS: usize = 34;

/**
 * @dev Maclaurin coefficients of `fixed_exp`: entry k is 34! / k!, so the series is divided by 34! only once at the
 * end. 34! still fits in 128 bits.
 */
pub const EXP_COEFFICIENTS: [U256; NUM_OF_EXP_COEFFICIENTS] = [
    U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0x0000000000000000, 0x0000000000000000]), // 34! / 0!
    U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0x0000000000000000, 0x0000000000000000]), // 34! / 1!
    U256([0x222ed3ad80000000, 0x6f0de268cf7e5641, 0x0000000000000000, 0x0000000000000000]), // 34! / 2!
    U256([0xb60f9be480000000, 0x2504a0cd9a7f7215, 0x0000000000000000, 0x0000000000000000]), // 34! / 3!
    U256([0x6d83e6f920000000, 0x09412833669fdc85, 0x0000000000000000, 0x0000000000000000]), // 34! / 4!
    U256([0xe2b3fafea0000000, 0x01d9d4d714865f4d, 0x0000000000000000, 0x0000000000000000]), // 34! / 5!
    U256([0xfb1dff2a70000000, 0x004ef8ce836bba8c, 0x0000000000000000, 0x0000000000000000]), // 34! / 6!
    U256([0x6d04490610000000, 0x000b481d807d1aa6, 0x0000000000000000, 0x0000000000000000]), // 34! / 7!
    U256([0xcda08920c2000000, 0x00016903b00fa354, 0x0000000000000000, 0x0000000000000000]), // 34! / 8!
    U256([0x334ab9e732000000, 0x0000281cdaac677b, 0x0000000000000000, 0x0000000000000000]), // 34! / 9!
    U256([0xeb8778fd85000000, 0x00000402e2aad725, 0x0000000000000000, 0x0000000000000000]), // 34! / 10!
    U256([0xfe2396a2af000000, 0x0000005d5a6c9f31, 0x0000000000000000, 0x0000000000000000]), // 34! / 11!
    U256([0x2a82f73839400000, 0x00000007c7890d44, 0x0000000000000000, 0x0000000000000000]), // 34! / 12!
    U256([0x034526b58e400000, 0x000000009931ed54, 0x0000000000000000, 0x0000000000000000]), // 34! / 13!
    U256([0x24ce150cf7e00000, 0x000000000af147cf, 0x0000000000000000, 0x0000000000000000]), // 34! / 14!
    U256([0x46b867cdaa200000, 0x0000000000bac085, 0x0000000000000000, 0x0000000000000000]), // 34! / 15!
    U256([0x546b867cdaa20000, 0x00000000000bac08, 0x0000000000000000, 0x0000000000000000]), // 34! / 16!
    U256([0x41338061b2820000, 0x000000000000afc4, 0x0000000000000000, 0x0000000000000000]), // 34! / 17!
    U256([0xcabbc0056d790000, 0x00000000000009c3, 0x0000000000000000, 0x0000000000000000]), // 34! / 18!
    U256([0x9168328705c30000, 0x0000000000000083, 0x0000000000000000, 0x0000000000000000]), // 34! / 19!
    U256([0x94120286c049c000, 0x0000000000000006, 0x0000000000000000, 0x0000000000000000]), // 34! / 20!
    U256([0x50319e98b3d2c000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 21!
    U256([0x03a52a1e36b82000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 22!
    U256([0x00289286e0fce000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 23!
    U256([0x0001b0c59eb53400, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 24!
    U256([0x0000114f95b55400, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 25!
    U256([0x000000aa7210d200, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 26!
    U256([0x0000000650139600, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 27!
    U256([0x0000000039b78e80, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 28!
    U256([0x0000000001fd8080, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 29!
    U256([0x000000000010fbc0, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 30!
    U256([0x0000000000008c40, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 31!
    U256([0x0000000000000462, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 32!
    U256([0x0000000000000022, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000]), // 34! / 33!
];

/**
 * @dev Entry `precision - MIN_PRECISION` holds the largest input for which `fixed_exp(x, precision)` cannot overflow,
 * upshifted to MAX_PRECISION. The array is sorted in descending order, which `find_position_in_max_exp_array` relies on.
 */
pub const MAX_EXP_ARRAY: [U256; (MAX_PRECISION - MIN_PRECISION + 1) as usize] = [
    U256([0x0000000000000000, 0x35fedd1480000000, 0x000000000000001c, 0x0000000000000000]), //  32: 0x1c35fedd14800000000000000000000000
    U256([0x0000000000000000, 0x0ce43b3200000000, 0x000000000000001b, 0x0000000000000000]), //  33: 0x1b0ce43b32000000000000000000000000
    U256([0x0000000000000000, 0xf0028ec1e0000000, 0x0000000000000019, 0x0000000000000000]), //  34: 0x19f0028ec1e00000000000000000000000
    U256([0x0000000000000000, 0xded91f0e70000000, 0x0000000000000018, 0x0000000000000000]), //  35: 0x18ded91f0e700000000000000000000000
    U256([0x0000000000000000, 0xd8ec7f0410000000, 0x0000000000000017, 0x0000000000000000]), //  36: 0x17d8ec7f04100000000000000000000000
    U256([0x0000000000000000, 0xddc6556cd8000000, 0x0000000000000016, 0x0000000000000000]), //  37: 0x16ddc6556cd80000000000000000000000
    U256([0x0000000000000000, 0xecf52776a0000000, 0x0000000000000015, 0x0000000000000000]), //  38: 0x15ecf52776a00000000000000000000000
    U256([0x0000000000000000, 0x060c256cb2000000, 0x0000000000000015, 0x0000000000000000]), //  39: 0x15060c256cb20000000000000000000000
    U256([0x0000000000000000, 0x28a2f98d72800000, 0x0000000000000014, 0x0000000000000000]), //  40: 0x1428a2f98d728000000000000000000000
    U256([0x0000000000000000, 0x545598e5c2000000, 0x0000000000000013, 0x0000000000000000]), //  41: 0x13545598e5c20000000000000000000000
    U256([0x0000000000000000, 0x88c4161ce1c00000, 0x0000000000000012, 0x0000000000000000]), //  42: 0x1288c4161ce1c000000000000000000000
    U256([0x0000000000000000, 0xc592761c66600000, 0x0000000000000011, 0x0000000000000000]), //  43: 0x11c592761c666000000000000000000000
    U256([0x0000000000000000, 0x0a688680a7500000, 0x0000000000000011, 0x0000000000000000]), //  44: 0x110a688680a75000000000000000000000
    U256([0x0000000000000000, 0x56f1b5bedf740000, 0x0000000000000010, 0x0000000000000000]), //  45: 0x1056f1b5bedf7400000000000000000000
    U256([0x0000000000000000, 0xaadceceeff8a0000, 0x000000000000000f, 0x0000000000000000]), //  46: 0xfaadceceeff8a00000000000000000000
    U256([0x0000000000000000, 0x05dc6b27edad0000, 0x000000000000000f, 0x0000000000000000]), //  47: 0xf05dc6b27edad00000000000000000000
    U256([0x0000000000000000, 0x67a5a25da4100000, 0x000000000000000e, 0x0000000000000000]), //  48: 0xe67a5a25da41000000000000000000000
    U256([0x0000000000000000, 0xcff115b14eedc000, 0x000000000000000d, 0x0000000000000000]), //  49: 0xdcff115b14eedc0000000000000000000
    U256([0x0000000000000000, 0x3e7a392431238000, 0x000000000000000d, 0x0000000000000000]), //  50: 0xd3e7a3924312380000000000000000000
    U256([0x0000000000000000, 0xb2ff529eb71e4000, 0x000000000000000c, 0x0000000000000000]), //  51: 0xcb2ff529eb71e40000000000000000000
    U256([0x0000000000000000, 0x2d415c3db974a800, 0x000000000000000c, 0x0000000000000000]), //  52: 0xc2d415c3db974a8000000000000000000
    U256([0x0000000000000000, 0xad03e7d883f69800, 0x000000000000000b, 0x0000000000000000]), //  53: 0xbad03e7d883f698000000000000000000
    U256([0x0000000000000000, 0x320d03b2c343d400, 0x000000000000000b, 0x0000000000000000]), //  54: 0xb320d03b2c343d4000000000000000000
    U256([0x0000000000000000, 0xbc25204e02828d00, 0x000000000000000a, 0x0000000000000000]), //  55: 0xabc25204e02828d000000000000000000
    U256([0x0000000000000000, 0x4b16f74ee4bb2000, 0x000000000000000a, 0x0000000000000000]), //  56: 0xa4b16f74ee4bb20000000000000000000
    U256([0x0000000000000000, 0xdeaf736ac1f569c0, 0x0000000000000009, 0x0000000000000000]), //  57: 0x9deaf736ac1f569c00000000000000000
    U256([0x0000000000000000, 0x76bd9952c7aa9560, 0x0000000000000009, 0x0000000000000000]), //  58: 0x976bd9952c7aa95600000000000000000
    U256([0x0000000000000000, 0x131271922eaa6060, 0x0000000000000009, 0x0000000000000000]), //  59: 0x9131271922eaa60600000000000000000
    U256([0x0000000000000000, 0xb380f3558668c468, 0x0000000000000008, 0x0000000000000000]), //  60: 0x8b380f3558668c4680000000000000000
    U256([0x0000000000000000, 0x57ddf0117efa2158, 0x0000000000000008, 0x0000000000000000]), //  61: 0x857ddf0117efa21580000000000000000
    U256([0x0000000000000000, 0xfffffffffffffffe, 0x0000000000000007, 0x0000000000000000]), //  62: 0x7fffffffffffffffe0000000000000000
    U256([0x0000000000000000, 0xabbf6f6abb9d087f, 0x0000000000000007, 0x0000000000000000]), //  63: 0x7abbf6f6abb9d087f0000000000000000
    U256([0x0000000000000000, 0x5af62cbac95f7dfa, 0x0000000000000007, 0x0000000000000000]), //  64: 0x75af62cbac95f7dfa0000000000000000
    U256([0x0000000000000000, 0x0d7fb7452e187ac1, 0x0000000000000007, 0x0000000000000000]), //  65: 0x70d7fb7452e187ac10000000000000000
    U256([0x4000000000000000, 0xc3390ecc8af37929, 0x0000000000000006, 0x0000000000000000]), //  66: 0x6c3390ecc8af379294000000000000000
    U256([0x6000000000000000, 0x7c00a3b07ffc01fd, 0x0000000000000006, 0x0000000000000000]), //  67: 0x67c00a3b07ffc01fd6000000000000000
    U256([0x2000000000000000, 0x37b647c39cbb9d3d, 0x0000000000000006, 0x0000000000000000]), //  68: 0x637b647c39cbb9d3d2000000000000000
    U256([0x8400000000000000, 0xf63b1fc104dbd395, 0x0000000000000005, 0x0000000000000000]), //  69: 0x5f63b1fc104dbd3958400000000000000
    U256([0x3400000000000000, 0xb771955b36e12f72, 0x0000000000000005, 0x0000000000000000]), //  70: 0x5b771955b36e12f723400000000000000
    U256([0xf600000000000000, 0x7b3d49dda84556d6, 0x0000000000000005, 0x0000000000000000]), //  71: 0x57b3d49dda84556d6f600000000000000
    U256([0x3080000000000000, 0x4183095b2c8ececf, 0x0000000000000005, 0x0000000000000000]), //  72: 0x54183095b2c8ececf3080000000000000
    U256([0xf740000000000000, 0x0a28be635ca2b888, 0x0000000000000005, 0x0000000000000000]), //  73: 0x50a28be635ca2b888f740000000000000
    U256([0x3c20000000000000, 0xd5156639708c9db3, 0x0000000000000004, 0x0000000000000000]), //  74: 0x4d5156639708c9db33c20000000000000
    U256([0xdfd0000000000000, 0xa23105873875bd52, 0x0000000000000004, 0x0000000000000000]), //  75: 0x4a23105873875bd52dfd0000000000000
    U256([0x7568000000000000, 0x71649d87199aa990, 0x0000000000000004, 0x0000000000000000]), //  76: 0x471649d87199aa9907568000000000000
    U256([0x7cf8000000000000, 0x429a21a029d4c145, 0x0000000000000004, 0x0000000000000000]), //  77: 0x4429a21a029d4c1457cf8000000000000
    U256([0x2cb2000000000000, 0x15bc6d6fb7dd71af, 0x0000000000000004, 0x0000000000000000]), //  78: 0x415bc6d6fb7dd71af2cb2000000000000
    U256([0x3ce1000000000000, 0xeab73b3bbfe28224, 0x0000000000000003, 0x0000000000000000]), //  79: 0x3eab73b3bbfe282243ce1000000000000
    U256([0xe229800000000000, 0xc1771ac9fb6b4c18, 0x0000000000000003, 0x0000000000000000]), //  80: 0x3c1771ac9fb6b4c18e229800000000000
    U256([0x8525400000000000, 0x99e96897690418f7, 0x0000000000000003, 0x0000000000000000]), //  81: 0x399e96897690418f78525400000000000
    U256([0xf0ea800000000000, 0x73fc456c53bb779b, 0x0000000000000003, 0x0000000000000000]), //  82: 0x373fc456c53bb779bf0ea800000000000
    U256([0x6ab8b00000000000, 0x4f9e8e490c48e67e, 0x0000000000000003, 0x0000000000000000]), //  83: 0x34f9e8e490c48e67e6ab8b00000000000
    U256([0x0b33300000000000, 0x2cbfd4a7adc79056, 0x0000000000000003, 0x0000000000000000]), //  84: 0x32cbfd4a7adc790560b33300000000000
    U256([0xa946100000000000, 0x0b50570f6e5d2acc, 0x0000000000000003, 0x0000000000000000]), //  85: 0x30b50570f6e5d2acca946100000000000
    U256([0x6c28600000000000, 0xeb40f9f620fda6b5, 0x0000000000000002, 0x0000000000000000]), //  86: 0x2eb40f9f620fda6b56c28600000000000
    U256([0xa6af580000000000, 0xcc8340ecb0d0f520, 0x0000000000000002, 0x0000000000000000]), //  87: 0x2cc8340ecb0d0f520a6af580000000000
    U256([0xf1ba028000000000, 0xaf09481380a0a35c, 0x0000000000000002, 0x0000000000000000]), //  88: 0x2af09481380a0a35cf1ba028000000000
    U256([0x287b1b0000000000, 0x92c5bdd3b92ec810, 0x0000000000000002, 0x0000000000000000]), //  89: 0x292c5bdd3b92ec810287b1b0000000000
    U256([0xac6d6b8000000000, 0x77abdcdab07d5a77, 0x0000000000000002, 0x0000000000000000]), //  90: 0x277abdcdab07d5a77ac6d6b8000000000
    U256([0xd64df5e000000000, 0x5daf6654b1eaa55f, 0x0000000000000002, 0x0000000000000000]), //  91: 0x25daf6654b1eaa55fd64df5e000000000
    U256([0x2dce88b000000000, 0x44c49c648baa9819, 0x0000000000000002, 0x0000000000000000]), //  92: 0x244c49c648baa98192dce88b000000000
    U256([0x2471268800000000, 0x2ce03cd5619a311b, 0x0000000000000002, 0x0000000000000000]), //  93: 0x22ce03cd5619a311b2471268800000000
    U256([0x54a44a0e00000000, 0x15f77c045fbe8856, 0x0000000000000002, 0x0000000000000000]), //  94: 0x215f77c045fbe885654a44a0e00000000
    U256([0xffffffff00000000, 0xffffffffffffffff, 0x0000000000000001, 0x0000000000000000]), //  95: 0x1ffffffffffffffffffffffff00000000
    U256([0xc4d3ede580000000, 0xeaefdbdaaee7421f, 0x0000000000000001, 0x0000000000000000]), //  96: 0x1eaefdbdaaee7421fc4d3ede580000000
    U256([0x8ca57b0980000000, 0xd6bd8b2eb257df7e, 0x0000000000000001, 0x0000000000000000]), //  97: 0x1d6bd8b2eb257df7e8ca57b0980000000
    U256([0x443f7f1320000000, 0xc35fedd14b861eb0, 0x0000000000000001, 0x0000000000000000]), //  98: 0x1c35fedd14b861eb0443f7f1320000000
    U256([0x56e8ada5a0000000, 0xb0ce43b322bcde4a, 0x0000000000000001, 0x0000000000000000]), //  99: 0x1b0ce43b322bcde4a56e8ada5a0000000
    U256([0x5a195a39d8000000, 0x9f0028ec1fff007f, 0x0000000000000001, 0x0000000000000000]), // 100: 0x19f0028ec1fff007f5a195a39d8000000
    U256([0x49b15ba524000000, 0x8ded91f0e72ee74f, 0x0000000000000001, 0x0000000000000000]), // 101: 0x18ded91f0e72ee74f49b15ba524000000
    U256([0x615fd41a62000000, 0x7d8ec7f04136f4e5, 0x0000000000000001, 0x0000000000000000]), // 102: 0x17d8ec7f04136f4e5615fd41a62000000
    U256([0x8d12d22e6f000000, 0x6ddc6556cdb84bdc, 0x0000000000000001, 0x0000000000000000]), // 103: 0x16ddc6556cdb84bdc8d12d22e6f000000
    U256([0xbd8395814f000000, 0x5ecf52776a1155b5, 0x0000000000000001, 0x0000000000000000]), // 104: 0x15ecf52776a1155b5bd8395814f000000
    U256([0xcc3754cf40c00000, 0x5060c256cb23b3b3, 0x0000000000000001, 0x0000000000000000]), // 105: 0x15060c256cb23b3b3cc3754cf40c00000
    U256([0x3ddab715be200000, 0x428a2f98d728ae22, 0x0000000000000001, 0x0000000000000000]), // 106: 0x1428a2f98d728ae223ddab715be200000
    U256([0xcf0ede6803400000, 0x3545598e5c23276c, 0x0000000000000001, 0x0000000000000000]), // 107: 0x13545598e5c23276ccf0ede6803400000
    U256([0xb7f6108119480000, 0x288c4161ce1d6f54, 0x0000000000000001, 0x0000000000000000]), // 108: 0x1288c4161ce1d6f54b7f6108119480000
    U256([0x1d5a01a40f140000, 0x1c592761c666aa64, 0x0000000000000001, 0x0000000000000000]), // 109: 0x11c592761c666aa641d5a01a40f140000
    U256([0x5f3e6e6cfdcc0000, 0x10a688680a753051, 0x0000000000000001, 0x0000000000000000]), // 110: 0x110a688680a7530515f3e6e6cfdcc0000
    U256([0xcb2ce8aed4280000, 0x056f1b5bedf75c6b, 0x0000000000000001, 0x0000000000000000]), // 111: 0x1056f1b5bedf75c6bcb2ce8aed4280000
    U256([0x0f3875f008270000, 0xfaadceceeff8a089, 0x0000000000000000, 0x0000000000000000]), // 112: 0xfaadceceeff8a0890f3875f008270000
    U256([0x388a600f6ba08000, 0xf05dc6b27edad306, 0x0000000000000000, 0x0000000000000000]), // 113: 0xf05dc6b27edad306388a600f6ba08000
    U256([0xe1495d5b18cda000, 0xe67a5a25da41063d, 0x0000000000000000, 0x0000000000000000]), // 114: 0xe67a5a25da41063de1495d5b18cda000
    U256([0xfc3aa5353f2e4000, 0xdcff115b14eedde6, 0x0000000000000000, 0x0000000000000000]), // 115: 0xdcff115b14eedde6fc3aa5353f2e4000
    U256([0x9aae2e0f868f8800, 0xd3e7a3924312399f, 0x0000000000000000, 0x0000000000000000]), // 116: 0xd3e7a3924312399f9aae2e0f868f8800
    U256([0x82cccd5a1ee26c00, 0xcb2ff529eb71e415, 0x0000000000000000, 0x0000000000000000]), // 117: 0xcb2ff529eb71e41582cccd5a1ee26c00
    U256([0x2a51840c0b67ec00, 0xc2d415c3db974ab3, 0x0000000000000000, 0x0000000000000000]), // 118: 0xc2d415c3db974ab32a51840c0b67ec00
    U256([0x5b0a186184e06b00, 0xbad03e7d883f69ad, 0x0000000000000000, 0x0000000000000000]), // 119: 0xbad03e7d883f69ad5b0a186184e06b00
    U256([0x29abd6075f0cc580, 0xb320d03b2c343d48, 0x0000000000000000, 0x0000000000000000]), // 120: 0xb320d03b2c343d4829abd6075f0cc580
    U256([0x3c6e80bcdb1a9580, 0xabc25204e02828d7, 0x0000000000000000, 0x0000000000000000]), // 121: 0xabc25204e02828d73c6e80bcdb1a9580
    U256([0x0a1ec6c15fbbf2c0, 0xa4b16f74ee4bb204, 0x0000000000000000, 0x0000000000000000]), // 122: 0xa4b16f74ee4bb2040a1ec6c15fbbf2c0
    U256([0xeb1b5ae3f36c1300, 0x9deaf736ac1f569d, 0x0000000000000000, 0x0000000000000000]), // 123: 0x9deaf736ac1f569deb1b5ae3f36c1300
    U256([0xf5937d790ef65030, 0x976bd9952c7aa957, 0x0000000000000000, 0x0000000000000000]), // 124: 0x976bd9952c7aa957f5937d790ef65030
    U256([0x4b73a22d0bd4f2bc, 0x9131271922eaa606, 0x0000000000000000, 0x0000000000000000]), // 125: 0x9131271922eaa6064b73a22d0bd4f2bc
    U256([0xc91c49a2f8e967b8, 0x8b380f3558668c46, 0x0000000000000000, 0x0000000000000000]), // 126: 0x8b380f3558668c46c91c49a2f8e967b8
    U256([0x3189036ee0f27453, 0x6ae67b5f2f528d5f, 0x0000000000000000, 0x0000000000000000]), // 127: 0x6ae67b5f2f528d5f3189036ee0f27453
];

pub const NUM_OF_LAMBERT_COEFFICIENTS: usize = 34;
pub const NUM_OF_LAMBERT_SAMPLES: usize = 128;

/**
 * @dev Coefficients of the Maclaurin series of W(x) / x: entry n - 1 is 34! * n^(n-1) / n!, so the series shares a
 * single division by 34!. FIXED_1 * 34! still fits in 256 bits.
 */
pub const LAMBERT_COEFFICIENTS: [U256; NUM_OF_LAMBERT_COEFFICIENTS] = [
    U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0x0000000000000000, 0x0000000000000000]), // 34! * 1^0 / 1!
    U256([0x445da75b00000000, 0xde1bc4d19efcac82, 0x0000000000000000, 0x0000000000000000]), // 34! * 2^1 / 2!
    U256([0x668c7b0880000000, 0x4d29a73a6e7b02c3, 0x0000000000000001, 0x0000000000000000]), // 34! * 3^2 / 3!
    U256([0x60f9be4800000000, 0x504a0cd9a7f7215b, 0x0000000000000002, 0x0000000000000000]), // 34! * 4^3 / 4!
    U256([0x7967c7a4a0000000, 0x84d0a1191c0ead26, 0x0000000000000004, 0x0000000000000000]), // 34! * 5^4 / 5!
    U256([0xaf26a90a00000000, 0x5ec580d7e8427a4b, 0x0000000000000009, 0x0000000000000000]), // 34! * 6^5 / 6!
    U256([0x6e5b3b1f10000000, 0x40b0be1615a47dba, 0x0000000000000014, 0x0000000000000000]), // 34! * 7^6 / 7!
    U256([0x2418400000000000, 0x207601f46a99b411, 0x000000000000002d, 0x0000000000000000]), // 34! * 8^7 / 8!
    U256([0x288a7eb1b2000000, 0xebaac4c37c622dd8, 0x0000000000000066, 0x0000000000000000]), // 34! * 9^8 / 9!
    U256([0x1ba10cf200000000, 0x17240135f7dbd43a, 0x00000000000000ef, 0x0000000000000000]), // 34! * 10^9 / 10!
    U256([0x94a87b3657000000, 0xc33c676a5eb24160, 0x0000000000000233, 0x0000000000000000]), // 34! * 11^10 / 11!
    U256([0xa9f8700000000000, 0xcde48bc0254bed49, 0x0000000000000541, 0x0000000000000000]), // 34! * 12^11 / 12!
    U256([0x3abca0d19a400000, 0x1fad2cdd4d4cb8d7, 0x0000000000000cae, 0x0000000000000000]), // 34! * 13^12 / 13!
    U256([0xedba956400000000, 0x2aa2f760d15c41ce, 0x0000000000001edb, 0x0000000000000000]), // 34! * 14^13 / 14!
    U256([0x9659841a2e200000, 0xd20d2dabd386c952, 0x0000000000004ba8, 0x0000000000000000]), // 34! * 15^14 / 15!
    U256([0x0000000000000000, 0x8546b867cdaa2000, 0x000000000000bac0, 0x0000000000000000]), // 34! * 16^15 / 16!
    U256([0x8ebf5bbf24820000, 0xe70c03625b9db76c, 0x000000000001cfa8, 0x0000000000000000]), // 34! * 17^16 / 17!
    U256([0x09b26f8200000000, 0x99f82060df265f33, 0x000000000004851d, 0x0000000000000000]), // 34! * 18^17 / 18!
    U256([0x55f027723cbb0000, 0x19b129d270c44f6f, 0x00000000000b550d, 0x0000000000000000]), // 34! * 19^18 / 19!
    U256([0xd4b0000000000000, 0xadc761dc272deb65, 0x00000000001c877d, 0x0000000000000000]), // 34! * 20^19 / 20!
    U256([0xd22a81b64406c000, 0xce97479f33a77f2a, 0x000000000048178e, 0x0000000000000000]), // 34! * 21^20 / 21!
    U256([0xef2f8a6c00000000, 0x68b9d810fedf6695, 0x0000000000b6ca82, 0x0000000000000000]), // 34! * 22^21 / 22!
    U256([0x2a7c7f11ec36e000, 0x31a5b05d007b8cb7, 0x0000000001d0e766, 0x0000000000000000]), // 34! * 23^22 / 23!
    U256([0x0000000000000000, 0xd9f85fd9c6c78000, 0x0000000004a1c37b, 0x0000000000000000]), // 34! * 24^23 / 24!
    U256([0xee08250313b65400, 0x1b702bf491e2ebfc, 0x000000000bd8369f, 0x0000000000000000]), // 34! * 25^24 / 25!
    U256([0x225764d400000000, 0xa9f6c70ab2cb59d9, 0x000000001e5c7c32, 0x0000000000000000]), // 34! * 26^25 / 26!
    U256([0x08e742496221e600, 0xe165e910f95120a7, 0x000000004dff5820, 0x0000000000000000]), // 34! * 27^26 / 27!
    U256([0x6000000000000000, 0xb1fced378ee50e53, 0x00000000c8c8f66d, 0x0000000000000000]), // 34! * 28^27 / 28!
    U256([0x599dbf16eb11d880, 0xff45bfa2938f128f, 0x0000000205db8dff, 0x0000000000000000]), // 34! * 29^28 / 29!
    U256([0x38d39a0800000000, 0x984351493e1786af, 0x000000053a044ebd, 0x0000000000000000]), // 34! * 30^29 / 30!
    U256([0x735869b487b59c40, 0xcc0f47633a544479, 0x0000000d86dae2a4, 0x0000000000000000]), // 34! * 31^30 / 31!
    U256([0x0000000000000000, 0x0000000000000000, 0x0000002310000000, 0x0000000000000000]), // 34! * 32^31 / 32!
    U256([0xdd51b08649680822, 0x6646c2039db1507c, 0x0000005b0485a76f, 0x0000000000000000]), // 34! * 33^32 / 33!
    U256([0x055e242200000000, 0x9545bc17efa6b5b0, 0x000000ec983c46c4, 0x0000000000000000]), // 34! * 34^33 / 34!
];

// W(x) / x is evaluated by its series up to e^-1, the radius of convergence
pub const LAMBERT_SERIES_RADIUS: U256 = U256([0x5d6f63c1482a7c86, 0x2f16ac6c59de6f8d, 0x0000000000000000, 0x0000000000000000]); // 0x2f16ac6c59de6f8d5d6f63c1482a7c86
// Spacing of the lookup samples: 3 / 127, so the table spans 3 past the radius
pub const LAMBERT_LOOKUP_STEP: U256 = U256([0x060c183060c18306, 0x03060c183060c183, 0x0000000000000000, 0x0000000000000000]); // 0x3060c183060c183060c183060c18306
// Largest input served by the lookup table
pub const LAMBERT_LOOKUP_MAX: U256 = U256([0x5d6f63c1482a7c80, 0xaf16ac6c59de6f8d, 0x0000000000000001, 0x0000000000000000]); // 0x1af16ac6c59de6f8d5d6f63c1482a7c80
// Largest input for which the asymptotic expansion stays inside 256 bits
pub const LAMBERT_ASYMPTOTIC_MAX: U256 = U256([0xceeef8bb48f285ff, 0x22d43e72c326539c, 0x000000000000006b, 0x0000000000000000]); // 0x6b22d43e72c326539cceeef8bb48f285ff

/**
 * @dev Entry i holds W(x) / x at MAX_PRECISION for x = LAMBERT_SERIES_RADIUS + 1 + i * LAMBERT_LOOKUP_STEP, rounded
 * down. Inputs between two samples are interpolated linearly.
 */
pub const LAMBERT_LOOKUP: [U256; NUM_OF_LAMBERT_SAMPLES] = [
    U256([0x09deaabc0373b9c5, 0x60e393c68d20b1bd, 0x0000000000000000, 0x0000000000000000]), //   0
    U256([0x9ed94719fb4c2011, 0x5f8f46e485412098, 0x0000000000000000, 0x0000000000000000]), //   1
    U256([0x7e72a648f992b606, 0x5e479ebb9129fb1b, 0x0000000000000000, 0x0000000000000000]), //   2
    U256([0xe2e9586be12b85fe, 0x5d0bd23fe42dfedd, 0x0000000000000000, 0x0000000000000000]), //   3
    U256([0xddfca81aeeb8095a, 0x5bdb29ddee979308, 0x0000000000000000, 0x0000000000000000]), //   4
    U256([0x2c0d2afcf0009dad, 0x5ab4fd8a260d2c7e, 0x0000000000000000, 0x0000000000000000]), //   5
    U256([0x724c65cf09001221, 0x5998b31359a55d48, 0x0000000000000000, 0x0000000000000000]), //   6
    U256([0x43e8860f9c018cf5, 0x5885bcad2b322dfc, 0x0000000000000000, 0x0000000000000000]), //   7
    U256([0x452fdf111b1f0be2, 0x577b97aa1fe222bb, 0x0000000000000000, 0x0000000000000000]), //   8
    U256([0x5baa27e2b949f704, 0x5679cb5e3575632e, 0x0000000000000000, 0x0000000000000000]), //   9
    U256([0x3c732f1cdff4a1c5, 0x557fe8241b3a31c8, 0x0000000000000000, 0x0000000000000000]), //  10
    U256([0xd6e59bbe95fc2a6b, 0x548d868026504875, 0x0000000000000000, 0x0000000000000000]), //  11
    U256([0xd05a867c17dd3088, 0x53a2465ce347cf34, 0x0000000000000000, 0x0000000000000000]), //  12
    U256([0x9c7f5511cf8f8acc, 0x52bdce5dcd4faed5, 0x0000000000000000, 0x0000000000000000]), //  13
    U256([0x817606e7885f7c3e, 0x51dfcb453c07f8da, 0x0000000000000000, 0x0000000000000000]), //  14
    U256([0xf8ff15590daa3cce, 0x5107ef6b0a5a2be8, 0x0000000000000000, 0x0000000000000000]), //  15
    U256([0x7bacba119993de7b, 0x5035f241d6eae0cd, 0x0000000000000000, 0x0000000000000000]), //  16
    U256([0x32171e1210164c66, 0x4f698fe90d5b53d5, 0x0000000000000000, 0x0000000000000000]), //  17
    U256([0x09a0eee240e16c85, 0x4ea288ca297a0e6a, 0x0000000000000000, 0x0000000000000000]), //  18
    U256([0x3fc398ba6e3becde, 0x4de0a13fdcf5d421, 0x0000000000000000, 0x0000000000000000]), //  19
    U256([0x06b06140804c4808, 0x4d23a145eef91fec, 0x0000000000000000, 0x0000000000000000]), //  20
    U256([0x26473db4ae0f11de, 0x4c6b5430d4c1ee55, 0x0000000000000000, 0x0000000000000000]), //  21
    U256([0xa11f4963a53b4240, 0x4bb7886c240562eb, 0x0000000000000000, 0x0000000000000000]), //  22
    U256([0xd521e0ea4583521e, 0x4b080f3f1cb491d2, 0x0000000000000000, 0x0000000000000000]), //  23
    U256([0x4d86be1db3168364, 0x4a5cbc96a05589cb, 0x0000000000000000, 0x0000000000000000]), //  24
    U256([0x58d78c33162d6ece, 0x49b566d402435176, 0x0000000000000000, 0x0000000000000000]), //  25
    U256([0x0f947383fd9a3276, 0x4911e6a02e5507a3, 0x0000000000000000, 0x0000000000000000]), //  26
    U256([0xc41db8a8d5cc0c88, 0x487216c2b31be4ad, 0x0000000000000000, 0x0000000000000000]), //  27
    U256([0x8cd3d788b5c5e9fc, 0x47d5d3fc4a7a1b18, 0x0000000000000000, 0x0000000000000000]), //  28
    U256([0xbc4f9e1c32b955d0, 0x473cfce4871a2c40, 0x0000000000000000, 0x0000000000000000]), //  29
    U256([0x485810e285e31c67, 0x46a771ca578ab878, 0x0000000000000000, 0x0000000000000000]), //  30
    U256([0x58c373dc676aa72d, 0x4615149718aed4c2, 0x0000000000000000, 0x0000000000000000]), //  31
    U256([0x6e1833ca47871384, 0x4585c8b3f8fe489c, 0x0000000000000000, 0x0000000000000000]), //  32
    U256([0xfb7e9d63c29ce735, 0x44f972f174e41e5e, 0x0000000000000000, 0x0000000000000000]), //  33
    U256([0x0beb05ecebf3c4dc, 0x446ff970ba86d8b0, 0x0000000000000000, 0x0000000000000000]), //  34
    U256([0x2d6f198b5ccaad96, 0x43e9438ec8897181, 0x0000000000000000, 0x0000000000000000]), //  35
    U256([0x57aeddb394e809ef, 0x436539d11ff7bea6, 0x0000000000000000, 0x0000000000000000]), //  36
    U256([0x1d86f66db5d81c2c, 0x42e3c5d3e5a91340, 0x0000000000000000, 0x0000000000000000]), //  37
    U256([0xa726cbe98df62174, 0x4264d2395303070e, 0x0000000000000000, 0x0000000000000000]), //  38
    U256([0x4c3a6349ecae4eea, 0x41e84a9a593bb719, 0x0000000000000000, 0x0000000000000000]), //  39
    U256([0x7a08f3f18876a5ab, 0x416e1b785d13eba0, 0x0000000000000000, 0x0000000000000000]), //  40
    U256([0xba9dd7e7e7b7e809, 0x40f6322ff389d423, 0x0000000000000000, 0x0000000000000000]), //  41
    U256([0xecf4184545d240a4, 0x40807cec8a466880, 0x0000000000000000, 0x0000000000000000]), //  42
    U256([0xe668e8ea0d9bf07f, 0x400cea9ce88a8d3a, 0x0000000000000000, 0x0000000000000000]), //  43
    U256([0x091e0ed7dfea0ac1, 0x3f9b6ae8772d4c55, 0x0000000000000000, 0x0000000000000000]), //  44
    U256([0xf54bcaafac383a13, 0x3f2bee253fd84594, 0x0000000000000000, 0x0000000000000000]), //  45
    U256([0x210c575c081c5958, 0x3ebe654e95208bb9, 0x0000000000000000, 0x0000000000000000]), //  46
    U256([0x78ce1f05ad53c086, 0x3e52c1fc5665635b, 0x0000000000000000, 0x0000000000000000]), //  47
    U256([0xdf718a6f5c1eff65, 0x3de8f65ac388101d, 0x0000000000000000, 0x0000000000000000]), //  48
    U256([0x28ca012df4cd2d49, 0x3d80f522d59bd0b3, 0x0000000000000000, 0x0000000000000000]), //  49
    U256([0x23648a161163a85a, 0x3d1ab193129ea72b, 0x0000000000000000, 0x0000000000000000]), //  50
    U256([0x35b95cfb53f76d75, 0x3cb61f68d32576c1, 0x0000000000000000, 0x0000000000000000]), //  51
    U256([0xa3619e77e4cc8473, 0x3c5332d9f1aae851, 0x0000000000000000, 0x0000000000000000]), //  52
    U256([0x9e1525f65759ef73, 0x3bf1e08edbe2aa10, 0x0000000000000000, 0x0000000000000000]), //  53
    U256([0x197746a3dfc4918f, 0x3b921d9cff13fa2c, 0x0000000000000000, 0x0000000000000000]), //  54
    U256([0xa5aefb8f63ae2ac4, 0x3b33df818910bfc1, 0x0000000000000000, 0x0000000000000000]), //  55
    U256([0x2a9f184967eccbf6, 0x3ad71c1c77e34fa3, 0x0000000000000000, 0x0000000000000000]), //  56
    U256([0xe2f7384a8a16521a, 0x3a7bc9abf2c5bb53, 0x0000000000000000, 0x0000000000000000]), //  57
    U256([0x3a68a0c6385a1c57, 0x3a21dec7e7636978, 0x0000000000000000, 0x0000000000000000]), //  58
    U256([0xc1c157ca4a7a6ee3, 0x39c9525de6c9cdf7, 0x0000000000000000, 0x0000000000000000]), //  59
    U256([0x40ff0190e0adaac3, 0x39721bad3dc85d12, 0x0000000000000000, 0x0000000000000000]), //  60
    U256([0x0469eb28dd3d77e0, 0x391c324344d3248f, 0x0000000000000000, 0x0000000000000000]), //  61
    U256([0x9fb4ff84394ab3da, 0x38c78df7e3c79627, 0x0000000000000000, 0x0000000000000000]), //  62
    U256([0xae08049d3554c20a, 0x387426ea4638ae9a, 0x0000000000000000, 0x0000000000000000]), //  63
    U256([0x6c1a99bbd2051378, 0x3821f57dbd276325, 0x0000000000000000, 0x0000000000000000]), //  64
    U256([0x2ff62fbbef289698, 0x37d0f256cb46a8c9, 0x0000000000000000, 0x0000000000000000]), //  65
    U256([0xbdd1feaf3cef9b73, 0x37811658591ffc7a, 0x0000000000000000, 0x0000000000000000]), //  66
    U256([0xdf0f380f7997154b, 0x37325aa10e9e82f7, 0x0000000000000000, 0x0000000000000000]), //  67
    U256([0x73b9a80d439311c6, 0x36e4b888cfb408d8, 0x0000000000000000, 0x0000000000000000]), //  68
    U256([0xe645fc9b08c64cca, 0x3698299e59f4bb9d, 0x0000000000000000, 0x0000000000000000]), //  69
    U256([0x023b57dd3ebfd50d, 0x364ca7a5012cb603, 0x0000000000000000, 0x0000000000000000]), //  70
    U256([0xab1b06aaee7e61d4, 0x36022c928915b778, 0x0000000000000000, 0x0000000000000000]), //  71
    U256([0x500ffe35559cc028, 0x35b8b28d1a73dc27, 0x0000000000000000, 0x0000000000000000]), //  72
    U256([0xc5eb4e60955132d7, 0x357033e951fe250e, 0x0000000000000000, 0x0000000000000000]), //  73
    U256([0x21b5412e4c4f8881, 0x3528ab2867934e3a, 0x0000000000000000, 0x0000000000000000]), //  74
    U256([0x9676c80094a61d59, 0x34e212f66c55057f, 0x0000000000000000, 0x0000000000000000]), //  75
    U256([0x540c24f42fa4b9bb, 0x349c66289e5b3c4b, 0x0000000000000000, 0x0000000000000000]), //  76
    U256([0xc8d6af6b0f7d00f7, 0x34579fbbd0c733a9, 0x0000000000000000, 0x0000000000000000]), //  77
    U256([0x924b5882b5b369bf, 0x3413bad2e712288b, 0x0000000000000000, 0x0000000000000000]), //  78
    U256([0xf730e213f71f12e9, 0x33d0b2b56286510e, 0x0000000000000000, 0x0000000000000000]), //  79
    U256([0x62c64457535ba1a1, 0x338e82ce00e24962, 0x0000000000000000, 0x0000000000000000]), //  80
    U256([0xc2f8ea1827f27a92, 0x334d26a96b373bb7, 0x0000000000000000, 0x0000000000000000]), //  81
    U256([0xe00b3e18c31475ea, 0x330c99f4f4211469, 0x0000000000000000, 0x0000000000000000]), //  82
    U256([0x99c7d5e6f33237d8, 0x32ccd87d64860949, 0x0000000000000000, 0x0000000000000000]), //  83
    U256([0x5a2e8556f250c1af, 0x328dde2dd617b666, 0x0000000000000000, 0x0000000000000000]), //  84
    U256([0x8262755af5a99af9, 0x324fa70e9adc270f, 0x0000000000000000, 0x0000000000000000]), //  85
    U256([0xa51040f41fa6e1e3, 0x32122f443110611c, 0x0000000000000000, 0x0000000000000000]), //  86
    U256([0x82f0f1485c4263d8, 0x31d5730e42c08314, 0x0000000000000000, 0x0000000000000000]), //  87
    U256([0x421b5ebc4ab4e1f1, 0x31996ec6b07b4a83, 0x0000000000000000, 0x0000000000000000]), //  88
    U256([0xb43ec2b85032e876, 0x315e1ee0a68ff46b, 0x0000000000000000, 0x0000000000000000]), //  89
    U256([0x6775b9efa1a145f8, 0x31237fe7bc4deacf, 0x0000000000000000, 0x0000000000000000]), //  90
    U256([0xe44627a6972ea2ff, 0x30e98e7f1cc5a356, 0x0000000000000000, 0x0000000000000000]), //  91
    U256([0x4205a3002650ec05, 0x30b04760b8917ec7, 0x0000000000000000, 0x0000000000000000]), //  92
    U256([0x132ce0cf3224241d, 0x3077a75c803468e9, 0x0000000000000000, 0x0000000000000000]), //  93
    U256([0x6f19cda9bace667a, 0x303fab57a6a275c3, 0x0000000000000000, 0x0000000000000000]), //  94
    U256([0xcf3bc1f6d5a064f0, 0x3008504beb8dcbd2, 0x0000000000000000, 0x0000000000000000]), //  95
    U256([0x1219ce0c2c5ac4b0, 0x2fd19346ed17dac6, 0x0000000000000000, 0x0000000000000000]), //  96
    U256([0x5852fd3d54ba9714, 0x2f9b7169808c324b, 0x0000000000000000, 0x0000000000000000]), //  97
    U256([0x4eea9c08cbdad574, 0x2f65e7e711cf4b06, 0x0000000000000000, 0x0000000000000000]), //  98
    U256([0xff8a251b6bf6d103, 0x2f30f405093042dd, 0x0000000000000000, 0x0000000000000000]), //  99
    U256([0xbfe323edfe037574, 0x2efc931a3750f2e8, 0x0000000000000000, 0x0000000000000000]), // 100
    U256([0x98685278339400cb, 0x2ec8c28e46dbe56d, 0x0000000000000000, 0x0000000000000000]), // 101
    U256([0x8a599b602379b851, 0x2e957fd933c3926d, 0x0000000000000000, 0x0000000000000000]), // 102
    U256([0x73412702f08ba0e5, 0x2e62c882c7c9ed44, 0x0000000000000000, 0x0000000000000000]), // 103
    U256([0x1e3ed695167feee2, 0x2e309a221c12ba36, 0x0000000000000000, 0x0000000000000000]), // 104
    U256([0x8dd07cfea4bcea10, 0x2dfef25d1f865ae1, 0x0000000000000000, 0x0000000000000000]), // 105
    U256([0xecc02c44344aeb31, 0x2dcdcee821cdc80d, 0x0000000000000000, 0x0000000000000000]), // 106
    U256([0xd0b201bb87260c83, 0x2d9d2d8562b34944, 0x0000000000000000, 0x0000000000000000]), // 107
    U256([0x42636308669b729a, 0x2d6d0c04a5b62a2c, 0x0000000000000000, 0x0000000000000000]), // 108
    U256([0x7fc5a0332691528f, 0x2d3d6842c9a23551, 0x0000000000000000, 0x0000000000000000]), // 109
    U256([0x834abc408c437c10, 0x2d0e402963fe1ea2, 0x0000000000000000, 0x0000000000000000]), // 110
    U256([0x8aff975e4d6a2a8c, 0x2cdf91ae60264790, 0x0000000000000000, 0x0000000000000000]), // 111
    U256([0xd74a75da09a1b6c5, 0x2cb15ad3a1eb65f6, 0x0000000000000000, 0x0000000000000000]), // 112
    U256([0xd6fcff373d210727, 0x2c8399a6ab8e9774, 0x0000000000000000, 0x0000000000000000]), // 113
    U256([0xa6883ca06bbc4535, 0x2c564c4046f64edb, 0x0000000000000000, 0x0000000000000000]), // 114
    U256([0x1e05cb493e23eed3, 0x2c2970c431f95264, 0x0000000000000000, 0x0000000000000000]), // 115
    U256([0x63bc7c0732856c18, 0x2bfd0560cd9eb145, 0x0000000000000000, 0x0000000000000000]), // 116
    U256([0xf4150f9d0ef41a2c, 0x2bd1084ed0332f7f, 0x0000000000000000, 0x0000000000000000]), // 117
    U256([0x6d040b12a82492fb, 0x2ba577d0fa1628b7, 0x0000000000000000, 0x0000000000000000]), // 118
    U256([0x855e89dc2f1e8a92, 0x2b7a5233cd21581e, 0x0000000000000000, 0x0000000000000000]), // 119
    U256([0xd72bdcde337d9cc7, 0x2b4f95cd46904d05, 0x0000000000000000, 0x0000000000000000]), // 120
    U256([0xa3faca6691914675, 0x2b2540fc9b4d9abb, 0x0000000000000000, 0x0000000000000000]), // 121
    U256([0xd8be8adb0a0db70f, 0x2afb5229f68d0830, 0x0000000000000000, 0x0000000000000000]), // 122
    U256([0x5bc73a3ba3ab7a2b, 0x2ad1c7c63a9b294c, 0x0000000000000000, 0x0000000000000000]), // 123
    U256([0x1c9c86361465dbb8, 0x2aa8a04ac3cbe1ee, 0x0000000000000000, 0x0000000000000000]), // 124
    U256([0xa2c8aeb9ab35430d, 0x2a7fda392d725a44, 0x0000000000000000, 0x0000000000000000]), // 125
    U256([0x717792b4faa216db, 0x2a57741b18cde618, 0x0000000000000000, 0x0000000000000000]), // 126
    U256([0x50a35626d6d5503a, 0x2a2f6c81f5d84dd9, 0x0000000000000000, 0x0000000000000000]), // 127
];

const_assert_eq!(NUM_OF_EXP_COEFFICIENTS, 34);
const_assert_eq!(MAX_EXP_ARRAY.len(), 96);
const_assert_eq!(NUM_OF_LAMBERT_COEFFICIENTS, 34);
const_assert_eq!(NUM_OF_LAMBERT_SAMPLES, 128);
