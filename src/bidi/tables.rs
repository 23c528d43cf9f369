// Generated from the Unicode Character Database (version 14.0.0). Do not edit by hand.

use super::types::{BidiType, JoiningType};

/// Bidi class ranges sorted by first code point. Code points not covered are `L`.
pub(crate) static BIDI_CLASS_RANGES: &[(u32, u32, BidiType)] = &[
    (0x0000, 0x0008, BidiType::BN),
    (0x0009, 0x0009, BidiType::S),
    (0x000A, 0x000A, BidiType::B),
    (0x000B, 0x000B, BidiType::S),
    (0x000C, 0x000C, BidiType::WS),
    (0x000D, 0x000D, BidiType::B),
    (0x000E, 0x001B, BidiType::BN),
    (0x001C, 0x001E, BidiType::B),
    (0x001F, 0x001F, BidiType::S),
    (0x0020, 0x0020, BidiType::WS),
    (0x0021, 0x0022, BidiType::ON),
    (0x0023, 0x0025, BidiType::ET),
    (0x0026, 0x002A, BidiType::ON),
    (0x002B, 0x002B, BidiType::ES),
    (0x002C, 0x002C, BidiType::CS),
    (0x002D, 0x002D, BidiType::ES),
    (0x002E, 0x002F, BidiType::CS),
    (0x0030, 0x0039, BidiType::EN),
    (0x003A, 0x003A, BidiType::CS),
    (0x003B, 0x0040, BidiType::ON),
    (0x005B, 0x0060, BidiType::ON),
    (0x007B, 0x007E, BidiType::ON),
    (0x007F, 0x0084, BidiType::BN),
    (0x0085, 0x0085, BidiType::B),
    (0x0086, 0x009F, BidiType::BN),
    (0x00A0, 0x00A0, BidiType::CS),
    (0x00A1, 0x00A1, BidiType::ON),
    (0x00A2, 0x00A5, BidiType::ET),
    (0x00A6, 0x00A9, BidiType::ON),
    (0x00AB, 0x00AC, BidiType::ON),
    (0x00AD, 0x00AD, BidiType::BN),
    (0x00AE, 0x00AF, BidiType::ON),
    (0x00B0, 0x00B1, BidiType::ET),
    (0x00B2, 0x00B3, BidiType::EN),
    (0x00B4, 0x00B4, BidiType::ON),
    (0x00B6, 0x00B8, BidiType::ON),
    (0x00B9, 0x00B9, BidiType::EN),
    (0x00BB, 0x00BF, BidiType::ON),
    (0x00D7, 0x00D7, BidiType::ON),
    (0x00F7, 0x00F7, BidiType::ON),
    (0x02B9, 0x02BA, BidiType::ON),
    (0x02C2, 0x02CF, BidiType::ON),
    (0x02D2, 0x02DF, BidiType::ON),
    (0x02E5, 0x02ED, BidiType::ON),
    (0x02EF, 0x02FF, BidiType::ON),
    (0x0300, 0x036F, BidiType::NSM),
    (0x0374, 0x0375, BidiType::ON),
    (0x037E, 0x037E, BidiType::ON),
    (0x0384, 0x0385, BidiType::ON),
    (0x0387, 0x0387, BidiType::ON),
    (0x03F6, 0x03F6, BidiType::ON),
    (0x0483, 0x0489, BidiType::NSM),
    (0x058A, 0x058A, BidiType::ON),
    (0x058D, 0x058E, BidiType::ON),
    (0x058F, 0x058F, BidiType::ET),
    (0x0590, 0x0590, BidiType::R),
    (0x0591, 0x05BD, BidiType::NSM),
    (0x05BE, 0x05BE, BidiType::R),
    (0x05BF, 0x05BF, BidiType::NSM),
    (0x05C0, 0x05C0, BidiType::R),
    (0x05C1, 0x05C2, BidiType::NSM),
    (0x05C3, 0x05C3, BidiType::R),
    (0x05C4, 0x05C5, BidiType::NSM),
    (0x05C6, 0x05C6, BidiType::R),
    (0x05C7, 0x05C7, BidiType::NSM),
    (0x05C8, 0x05FF, BidiType::R),
    (0x0600, 0x0605, BidiType::AN),
    (0x0606, 0x0607, BidiType::ON),
    (0x0608, 0x0608, BidiType::AL),
    (0x0609, 0x060A, BidiType::ET),
    (0x060B, 0x060B, BidiType::AL),
    (0x060C, 0x060C, BidiType::CS),
    (0x060D, 0x060D, BidiType::AL),
    (0x060E, 0x060F, BidiType::ON),
    (0x0610, 0x061A, BidiType::NSM),
    (0x061B, 0x064A, BidiType::AL),
    (0x064B, 0x065F, BidiType::NSM),
    (0x0660, 0x0669, BidiType::AN),
    (0x066A, 0x066A, BidiType::ET),
    (0x066B, 0x066C, BidiType::AN),
    (0x066D, 0x066F, BidiType::AL),
    (0x0670, 0x0670, BidiType::NSM),
    (0x0671, 0x06D5, BidiType::AL),
    (0x06D6, 0x06DC, BidiType::NSM),
    (0x06DD, 0x06DD, BidiType::AN),
    (0x06DE, 0x06DE, BidiType::ON),
    (0x06DF, 0x06E4, BidiType::NSM),
    (0x06E5, 0x06E6, BidiType::AL),
    (0x06E7, 0x06E8, BidiType::NSM),
    (0x06E9, 0x06E9, BidiType::ON),
    (0x06EA, 0x06ED, BidiType::NSM),
    (0x06EE, 0x06EF, BidiType::AL),
    (0x06F0, 0x06F9, BidiType::EN),
    (0x06FA, 0x0710, BidiType::AL),
    (0x0711, 0x0711, BidiType::NSM),
    (0x0712, 0x072F, BidiType::AL),
    (0x0730, 0x074A, BidiType::NSM),
    (0x074B, 0x07A5, BidiType::AL),
    (0x07A6, 0x07B0, BidiType::NSM),
    (0x07B1, 0x07BF, BidiType::AL),
    (0x07C0, 0x07EA, BidiType::R),
    (0x07EB, 0x07F3, BidiType::NSM),
    (0x07F4, 0x07F5, BidiType::R),
    (0x07F6, 0x07F9, BidiType::ON),
    (0x07FA, 0x07FC, BidiType::R),
    (0x07FD, 0x07FD, BidiType::NSM),
    (0x07FE, 0x0815, BidiType::R),
    (0x0816, 0x0819, BidiType::NSM),
    (0x081A, 0x081A, BidiType::R),
    (0x081B, 0x0823, BidiType::NSM),
    (0x0824, 0x0824, BidiType::R),
    (0x0825, 0x0827, BidiType::NSM),
    (0x0828, 0x0828, BidiType::R),
    (0x0829, 0x082D, BidiType::NSM),
    (0x082E, 0x0858, BidiType::R),
    (0x0859, 0x085B, BidiType::NSM),
    (0x085C, 0x085F, BidiType::R),
    (0x0860, 0x088F, BidiType::AL),
    (0x0890, 0x0891, BidiType::AN),
    (0x0892, 0x0897, BidiType::AL),
    (0x0898, 0x089F, BidiType::NSM),
    (0x08A0, 0x08C9, BidiType::AL),
    (0x08CA, 0x08E1, BidiType::NSM),
    (0x08E2, 0x08E2, BidiType::AN),
    (0x08E3, 0x0902, BidiType::NSM),
    (0x093A, 0x093A, BidiType::NSM),
    (0x093C, 0x093C, BidiType::NSM),
    (0x0941, 0x0948, BidiType::NSM),
    (0x094D, 0x094D, BidiType::NSM),
    (0x0951, 0x0957, BidiType::NSM),
    (0x0962, 0x0963, BidiType::NSM),
    (0x0981, 0x0981, BidiType::NSM),
    (0x09BC, 0x09BC, BidiType::NSM),
    (0x09C1, 0x09C4, BidiType::NSM),
    (0x09CD, 0x09CD, BidiType::NSM),
    (0x09E2, 0x09E3, BidiType::NSM),
    (0x09F2, 0x09F3, BidiType::ET),
    (0x09FB, 0x09FB, BidiType::ET),
    (0x09FE, 0x09FE, BidiType::NSM),
    (0x0A01, 0x0A02, BidiType::NSM),
    (0x0A3C, 0x0A3C, BidiType::NSM),
    (0x0A41, 0x0A42, BidiType::NSM),
    (0x0A47, 0x0A48, BidiType::NSM),
    (0x0A4B, 0x0A4D, BidiType::NSM),
    (0x0A51, 0x0A51, BidiType::NSM),
    (0x0A70, 0x0A71, BidiType::NSM),
    (0x0A75, 0x0A75, BidiType::NSM),
    (0x0A81, 0x0A82, BidiType::NSM),
    (0x0ABC, 0x0ABC, BidiType::NSM),
    (0x0AC1, 0x0AC5, BidiType::NSM),
    (0x0AC7, 0x0AC8, BidiType::NSM),
    (0x0ACD, 0x0ACD, BidiType::NSM),
    (0x0AE2, 0x0AE3, BidiType::NSM),
    (0x0AF1, 0x0AF1, BidiType::ET),
    (0x0AFA, 0x0AFF, BidiType::NSM),
    (0x0B01, 0x0B01, BidiType::NSM),
    (0x0B3C, 0x0B3C, BidiType::NSM),
    (0x0B3F, 0x0B3F, BidiType::NSM),
    (0x0B41, 0x0B44, BidiType::NSM),
    (0x0B4D, 0x0B4D, BidiType::NSM),
    (0x0B55, 0x0B56, BidiType::NSM),
    (0x0B62, 0x0B63, BidiType::NSM),
    (0x0B82, 0x0B82, BidiType::NSM),
    (0x0BC0, 0x0BC0, BidiType::NSM),
    (0x0BCD, 0x0BCD, BidiType::NSM),
    (0x0BF3, 0x0BF8, BidiType::ON),
    (0x0BF9, 0x0BF9, BidiType::ET),
    (0x0BFA, 0x0BFA, BidiType::ON),
    (0x0C00, 0x0C00, BidiType::NSM),
    (0x0C04, 0x0C04, BidiType::NSM),
    (0x0C3C, 0x0C3C, BidiType::NSM),
    (0x0C3E, 0x0C40, BidiType::NSM),
    (0x0C46, 0x0C48, BidiType::NSM),
    (0x0C4A, 0x0C4D, BidiType::NSM),
    (0x0C55, 0x0C56, BidiType::NSM),
    (0x0C62, 0x0C63, BidiType::NSM),
    (0x0C78, 0x0C7E, BidiType::ON),
    (0x0C81, 0x0C81, BidiType::NSM),
    (0x0CBC, 0x0CBC, BidiType::NSM),
    (0x0CCC, 0x0CCD, BidiType::NSM),
    (0x0CE2, 0x0CE3, BidiType::NSM),
    (0x0D00, 0x0D01, BidiType::NSM),
    (0x0D3B, 0x0D3C, BidiType::NSM),
    (0x0D41, 0x0D44, BidiType::NSM),
    (0x0D4D, 0x0D4D, BidiType::NSM),
    (0x0D62, 0x0D63, BidiType::NSM),
    (0x0D81, 0x0D81, BidiType::NSM),
    (0x0DCA, 0x0DCA, BidiType::NSM),
    (0x0DD2, 0x0DD4, BidiType::NSM),
    (0x0DD6, 0x0DD6, BidiType::NSM),
    (0x0E31, 0x0E31, BidiType::NSM),
    (0x0E34, 0x0E3A, BidiType::NSM),
    (0x0E3F, 0x0E3F, BidiType::ET),
    (0x0E47, 0x0E4E, BidiType::NSM),
    (0x0EB1, 0x0EB1, BidiType::NSM),
    (0x0EB4, 0x0EBC, BidiType::NSM),
    (0x0EC8, 0x0ECD, BidiType::NSM),
    (0x0F18, 0x0F19, BidiType::NSM),
    (0x0F35, 0x0F35, BidiType::NSM),
    (0x0F37, 0x0F37, BidiType::NSM),
    (0x0F39, 0x0F39, BidiType::NSM),
    (0x0F3A, 0x0F3D, BidiType::ON),
    (0x0F71, 0x0F7E, BidiType::NSM),
    (0x0F80, 0x0F84, BidiType::NSM),
    (0x0F86, 0x0F87, BidiType::NSM),
    (0x0F8D, 0x0F97, BidiType::NSM),
    (0x0F99, 0x0FBC, BidiType::NSM),
    (0x0FC6, 0x0FC6, BidiType::NSM),
    (0x102D, 0x1030, BidiType::NSM),
    (0x1032, 0x1037, BidiType::NSM),
    (0x1039, 0x103A, BidiType::NSM),
    (0x103D, 0x103E, BidiType::NSM),
    (0x1058, 0x1059, BidiType::NSM),
    (0x105E, 0x1060, BidiType::NSM),
    (0x1071, 0x1074, BidiType::NSM),
    (0x1082, 0x1082, BidiType::NSM),
    (0x1085, 0x1086, BidiType::NSM),
    (0x108D, 0x108D, BidiType::NSM),
    (0x109D, 0x109D, BidiType::NSM),
    (0x135D, 0x135F, BidiType::NSM),
    (0x1390, 0x1399, BidiType::ON),
    (0x1400, 0x1400, BidiType::ON),
    (0x1680, 0x1680, BidiType::WS),
    (0x169B, 0x169C, BidiType::ON),
    (0x1712, 0x1714, BidiType::NSM),
    (0x1732, 0x1733, BidiType::NSM),
    (0x1752, 0x1753, BidiType::NSM),
    (0x1772, 0x1773, BidiType::NSM),
    (0x17B4, 0x17B5, BidiType::NSM),
    (0x17B7, 0x17BD, BidiType::NSM),
    (0x17C6, 0x17C6, BidiType::NSM),
    (0x17C9, 0x17D3, BidiType::NSM),
    (0x17DB, 0x17DB, BidiType::ET),
    (0x17DD, 0x17DD, BidiType::NSM),
    (0x17F0, 0x17F9, BidiType::ON),
    (0x1800, 0x180A, BidiType::ON),
    (0x180B, 0x180D, BidiType::NSM),
    (0x180E, 0x180E, BidiType::BN),
    (0x180F, 0x180F, BidiType::NSM),
    (0x1885, 0x1886, BidiType::NSM),
    (0x18A9, 0x18A9, BidiType::NSM),
    (0x1920, 0x1922, BidiType::NSM),
    (0x1927, 0x1928, BidiType::NSM),
    (0x1932, 0x1932, BidiType::NSM),
    (0x1939, 0x193B, BidiType::NSM),
    (0x1940, 0x1940, BidiType::ON),
    (0x1944, 0x1945, BidiType::ON),
    (0x19DE, 0x19FF, BidiType::ON),
    (0x1A17, 0x1A18, BidiType::NSM),
    (0x1A1B, 0x1A1B, BidiType::NSM),
    (0x1A56, 0x1A56, BidiType::NSM),
    (0x1A58, 0x1A5E, BidiType::NSM),
    (0x1A60, 0x1A60, BidiType::NSM),
    (0x1A62, 0x1A62, BidiType::NSM),
    (0x1A65, 0x1A6C, BidiType::NSM),
    (0x1A73, 0x1A7C, BidiType::NSM),
    (0x1A7F, 0x1A7F, BidiType::NSM),
    (0x1AB0, 0x1ACE, BidiType::NSM),
    (0x1B00, 0x1B03, BidiType::NSM),
    (0x1B34, 0x1B34, BidiType::NSM),
    (0x1B36, 0x1B3A, BidiType::NSM),
    (0x1B3C, 0x1B3C, BidiType::NSM),
    (0x1B42, 0x1B42, BidiType::NSM),
    (0x1B6B, 0x1B73, BidiType::NSM),
    (0x1B80, 0x1B81, BidiType::NSM),
    (0x1BA2, 0x1BA5, BidiType::NSM),
    (0x1BA8, 0x1BA9, BidiType::NSM),
    (0x1BAB, 0x1BAD, BidiType::NSM),
    (0x1BE6, 0x1BE6, BidiType::NSM),
    (0x1BE8, 0x1BE9, BidiType::NSM),
    (0x1BED, 0x1BED, BidiType::NSM),
    (0x1BEF, 0x1BF1, BidiType::NSM),
    (0x1C2C, 0x1C33, BidiType::NSM),
    (0x1C36, 0x1C37, BidiType::NSM),
    (0x1CD0, 0x1CD2, BidiType::NSM),
    (0x1CD4, 0x1CE0, BidiType::NSM),
    (0x1CE2, 0x1CE8, BidiType::NSM),
    (0x1CED, 0x1CED, BidiType::NSM),
    (0x1CF4, 0x1CF4, BidiType::NSM),
    (0x1CF8, 0x1CF9, BidiType::NSM),
    (0x1DC0, 0x1DFF, BidiType::NSM),
    (0x1FBD, 0x1FBD, BidiType::ON),
    (0x1FBF, 0x1FC1, BidiType::ON),
    (0x1FCD, 0x1FCF, BidiType::ON),
    (0x1FDD, 0x1FDF, BidiType::ON),
    (0x1FED, 0x1FEF, BidiType::ON),
    (0x1FFD, 0x1FFE, BidiType::ON),
    (0x2000, 0x200A, BidiType::WS),
    (0x200B, 0x200D, BidiType::BN),
    (0x200F, 0x200F, BidiType::R),
    (0x2010, 0x2027, BidiType::ON),
    (0x2028, 0x2028, BidiType::WS),
    (0x2029, 0x2029, BidiType::B),
    (0x202A, 0x202A, BidiType::LRE),
    (0x202B, 0x202B, BidiType::RLE),
    (0x202C, 0x202C, BidiType::PDF),
    (0x202D, 0x202D, BidiType::LRO),
    (0x202E, 0x202E, BidiType::RLO),
    (0x202F, 0x202F, BidiType::CS),
    (0x2030, 0x2034, BidiType::ET),
    (0x2035, 0x2043, BidiType::ON),
    (0x2044, 0x2044, BidiType::CS),
    (0x2045, 0x205E, BidiType::ON),
    (0x205F, 0x205F, BidiType::WS),
    (0x2060, 0x2064, BidiType::BN),
    (0x2066, 0x2066, BidiType::LRI),
    (0x2067, 0x2067, BidiType::RLI),
    (0x2068, 0x2068, BidiType::FSI),
    (0x2069, 0x2069, BidiType::PDI),
    (0x206A, 0x206F, BidiType::BN),
    (0x2070, 0x2070, BidiType::EN),
    (0x2074, 0x2079, BidiType::EN),
    (0x207A, 0x207B, BidiType::ES),
    (0x207C, 0x207E, BidiType::ON),
    (0x2080, 0x2089, BidiType::EN),
    (0x208A, 0x208B, BidiType::ES),
    (0x208C, 0x208E, BidiType::ON),
    (0x20A0, 0x20CF, BidiType::ET),
    (0x20D0, 0x20F0, BidiType::NSM),
    (0x2100, 0x2101, BidiType::ON),
    (0x2103, 0x2106, BidiType::ON),
    (0x2108, 0x2109, BidiType::ON),
    (0x2114, 0x2114, BidiType::ON),
    (0x2116, 0x2118, BidiType::ON),
    (0x211E, 0x2123, BidiType::ON),
    (0x2125, 0x2125, BidiType::ON),
    (0x2127, 0x2127, BidiType::ON),
    (0x2129, 0x2129, BidiType::ON),
    (0x212E, 0x212E, BidiType::ET),
    (0x213A, 0x213B, BidiType::ON),
    (0x2140, 0x2144, BidiType::ON),
    (0x214A, 0x214D, BidiType::ON),
    (0x2150, 0x215F, BidiType::ON),
    (0x2189, 0x218B, BidiType::ON),
    (0x2190, 0x2211, BidiType::ON),
    (0x2212, 0x2212, BidiType::ES),
    (0x2213, 0x2213, BidiType::ET),
    (0x2214, 0x2335, BidiType::ON),
    (0x237B, 0x2394, BidiType::ON),
    (0x2396, 0x2426, BidiType::ON),
    (0x2440, 0x244A, BidiType::ON),
    (0x2460, 0x2487, BidiType::ON),
    (0x2488, 0x249B, BidiType::EN),
    (0x24EA, 0x26AB, BidiType::ON),
    (0x26AD, 0x27FF, BidiType::ON),
    (0x2900, 0x2B73, BidiType::ON),
    (0x2B76, 0x2B95, BidiType::ON),
    (0x2B97, 0x2BFF, BidiType::ON),
    (0x2CE5, 0x2CEA, BidiType::ON),
    (0x2CEF, 0x2CF1, BidiType::NSM),
    (0x2CF9, 0x2CFF, BidiType::ON),
    (0x2D7F, 0x2D7F, BidiType::NSM),
    (0x2DE0, 0x2DFF, BidiType::NSM),
    (0x2E00, 0x2E5D, BidiType::ON),
    (0x2E80, 0x2E99, BidiType::ON),
    (0x2E9B, 0x2EF3, BidiType::ON),
    (0x2F00, 0x2FD5, BidiType::ON),
    (0x2FF0, 0x2FFB, BidiType::ON),
    (0x3000, 0x3000, BidiType::WS),
    (0x3001, 0x3004, BidiType::ON),
    (0x3008, 0x3020, BidiType::ON),
    (0x302A, 0x302D, BidiType::NSM),
    (0x3030, 0x3030, BidiType::ON),
    (0x3036, 0x3037, BidiType::ON),
    (0x303D, 0x303F, BidiType::ON),
    (0x3099, 0x309A, BidiType::NSM),
    (0x309B, 0x309C, BidiType::ON),
    (0x30A0, 0x30A0, BidiType::ON),
    (0x30FB, 0x30FB, BidiType::ON),
    (0x31C0, 0x31E3, BidiType::ON),
    (0x321D, 0x321E, BidiType::ON),
    (0x3250, 0x325F, BidiType::ON),
    (0x327C, 0x327E, BidiType::ON),
    (0x32B1, 0x32BF, BidiType::ON),
    (0x32CC, 0x32CF, BidiType::ON),
    (0x3377, 0x337A, BidiType::ON),
    (0x33DE, 0x33DF, BidiType::ON),
    (0x33FF, 0x33FF, BidiType::ON),
    (0x4DC0, 0x4DFF, BidiType::ON),
    (0xA490, 0xA4C6, BidiType::ON),
    (0xA60D, 0xA60F, BidiType::ON),
    (0xA66F, 0xA672, BidiType::NSM),
    (0xA673, 0xA673, BidiType::ON),
    (0xA674, 0xA67D, BidiType::NSM),
    (0xA67E, 0xA67F, BidiType::ON),
    (0xA69E, 0xA69F, BidiType::NSM),
    (0xA6F0, 0xA6F1, BidiType::NSM),
    (0xA700, 0xA721, BidiType::ON),
    (0xA788, 0xA788, BidiType::ON),
    (0xA802, 0xA802, BidiType::NSM),
    (0xA806, 0xA806, BidiType::NSM),
    (0xA80B, 0xA80B, BidiType::NSM),
    (0xA825, 0xA826, BidiType::NSM),
    (0xA828, 0xA82B, BidiType::ON),
    (0xA82C, 0xA82C, BidiType::NSM),
    (0xA838, 0xA839, BidiType::ET),
    (0xA874, 0xA877, BidiType::ON),
    (0xA8C4, 0xA8C5, BidiType::NSM),
    (0xA8E0, 0xA8F1, BidiType::NSM),
    (0xA8FF, 0xA8FF, BidiType::NSM),
    (0xA926, 0xA92D, BidiType::NSM),
    (0xA947, 0xA951, BidiType::NSM),
    (0xA980, 0xA982, BidiType::NSM),
    (0xA9B3, 0xA9B3, BidiType::NSM),
    (0xA9B6, 0xA9B9, BidiType::NSM),
    (0xA9BC, 0xA9BD, BidiType::NSM),
    (0xA9E5, 0xA9E5, BidiType::NSM),
    (0xAA29, 0xAA2E, BidiType::NSM),
    (0xAA31, 0xAA32, BidiType::NSM),
    (0xAA35, 0xAA36, BidiType::NSM),
    (0xAA43, 0xAA43, BidiType::NSM),
    (0xAA4C, 0xAA4C, BidiType::NSM),
    (0xAA7C, 0xAA7C, BidiType::NSM),
    (0xAAB0, 0xAAB0, BidiType::NSM),
    (0xAAB2, 0xAAB4, BidiType::NSM),
    (0xAAB7, 0xAAB8, BidiType::NSM),
    (0xAABE, 0xAABF, BidiType::NSM),
    (0xAAC1, 0xAAC1, BidiType::NSM),
    (0xAAEC, 0xAAED, BidiType::NSM),
    (0xAAF6, 0xAAF6, BidiType::NSM),
    (0xAB6A, 0xAB6B, BidiType::ON),
    (0xABE5, 0xABE5, BidiType::NSM),
    (0xABE8, 0xABE8, BidiType::NSM),
    (0xABED, 0xABED, BidiType::NSM),
    (0xFB1D, 0xFB1D, BidiType::R),
    (0xFB1E, 0xFB1E, BidiType::NSM),
    (0xFB1F, 0xFB28, BidiType::R),
    (0xFB29, 0xFB29, BidiType::ES),
    (0xFB2A, 0xFB4F, BidiType::R),
    (0xFB50, 0xFD3D, BidiType::AL),
    (0xFD3E, 0xFD4F, BidiType::ON),
    (0xFD50, 0xFDCE, BidiType::AL),
    (0xFDCF, 0xFDCF, BidiType::ON),
    (0xFDD0, 0xFDEF, BidiType::BN),
    (0xFDF0, 0xFDFC, BidiType::AL),
    (0xFDFD, 0xFDFF, BidiType::ON),
    (0xFE00, 0xFE0F, BidiType::NSM),
    (0xFE10, 0xFE19, BidiType::ON),
    (0xFE20, 0xFE2F, BidiType::NSM),
    (0xFE30, 0xFE4F, BidiType::ON),
    (0xFE50, 0xFE50, BidiType::CS),
    (0xFE51, 0xFE51, BidiType::ON),
    (0xFE52, 0xFE52, BidiType::CS),
    (0xFE54, 0xFE54, BidiType::ON),
    (0xFE55, 0xFE55, BidiType::CS),
    (0xFE56, 0xFE5E, BidiType::ON),
    (0xFE5F, 0xFE5F, BidiType::ET),
    (0xFE60, 0xFE61, BidiType::ON),
    (0xFE62, 0xFE63, BidiType::ES),
    (0xFE64, 0xFE66, BidiType::ON),
    (0xFE68, 0xFE68, BidiType::ON),
    (0xFE69, 0xFE6A, BidiType::ET),
    (0xFE6B, 0xFE6B, BidiType::ON),
    (0xFE70, 0xFEFE, BidiType::AL),
    (0xFEFF, 0xFEFF, BidiType::BN),
    (0xFF01, 0xFF02, BidiType::ON),
    (0xFF03, 0xFF05, BidiType::ET),
    (0xFF06, 0xFF0A, BidiType::ON),
    (0xFF0B, 0xFF0B, BidiType::ES),
    (0xFF0C, 0xFF0C, BidiType::CS),
    (0xFF0D, 0xFF0D, BidiType::ES),
    (0xFF0E, 0xFF0F, BidiType::CS),
    (0xFF10, 0xFF19, BidiType::EN),
    (0xFF1A, 0xFF1A, BidiType::CS),
    (0xFF1B, 0xFF20, BidiType::ON),
    (0xFF3B, 0xFF40, BidiType::ON),
    (0xFF5B, 0xFF65, BidiType::ON),
    (0xFFE0, 0xFFE1, BidiType::ET),
    (0xFFE2, 0xFFE4, BidiType::ON),
    (0xFFE5, 0xFFE6, BidiType::ET),
    (0xFFE8, 0xFFEE, BidiType::ON),
    (0xFFF9, 0xFFFD, BidiType::ON),
    (0xFFFE, 0xFFFF, BidiType::BN),
    (0x10101, 0x10101, BidiType::ON),
    (0x10140, 0x1018C, BidiType::ON),
    (0x10190, 0x1019C, BidiType::ON),
    (0x101A0, 0x101A0, BidiType::ON),
    (0x101FD, 0x101FD, BidiType::NSM),
    (0x102E0, 0x102E0, BidiType::NSM),
    (0x102E1, 0x102FB, BidiType::EN),
    (0x10376, 0x1037A, BidiType::NSM),
    (0x10800, 0x1091E, BidiType::R),
    (0x1091F, 0x1091F, BidiType::ON),
    (0x10920, 0x10A00, BidiType::R),
    (0x10A01, 0x10A03, BidiType::NSM),
    (0x10A04, 0x10A04, BidiType::R),
    (0x10A05, 0x10A06, BidiType::NSM),
    (0x10A07, 0x10A0B, BidiType::R),
    (0x10A0C, 0x10A0F, BidiType::NSM),
    (0x10A10, 0x10A37, BidiType::R),
    (0x10A38, 0x10A3A, BidiType::NSM),
    (0x10A3B, 0x10A3E, BidiType::R),
    (0x10A3F, 0x10A3F, BidiType::NSM),
    (0x10A40, 0x10AE4, BidiType::R),
    (0x10AE5, 0x10AE6, BidiType::NSM),
    (0x10AE7, 0x10B38, BidiType::R),
    (0x10B39, 0x10B3F, BidiType::ON),
    (0x10B40, 0x10CFF, BidiType::R),
    (0x10D00, 0x10D23, BidiType::AL),
    (0x10D24, 0x10D27, BidiType::NSM),
    (0x10D28, 0x10D2F, BidiType::AL),
    (0x10D30, 0x10D39, BidiType::AN),
    (0x10D3A, 0x10D3F, BidiType::AL),
    (0x10D40, 0x10E5F, BidiType::R),
    (0x10E60, 0x10E7E, BidiType::AN),
    (0x10E7F, 0x10EAA, BidiType::R),
    (0x10EAB, 0x10EAC, BidiType::NSM),
    (0x10EAD, 0x10EBF, BidiType::R),
    (0x10EC0, 0x10EFF, BidiType::AL),
    (0x10F00, 0x10F2F, BidiType::R),
    (0x10F30, 0x10F45, BidiType::AL),
    (0x10F46, 0x10F50, BidiType::NSM),
    (0x10F51, 0x10F6F, BidiType::AL),
    (0x10F70, 0x10F81, BidiType::R),
    (0x10F82, 0x10F85, BidiType::NSM),
    (0x10F86, 0x10FFF, BidiType::R),
    (0x11001, 0x11001, BidiType::NSM),
    (0x11038, 0x11046, BidiType::NSM),
    (0x11052, 0x11065, BidiType::ON),
    (0x11070, 0x11070, BidiType::NSM),
    (0x11073, 0x11074, BidiType::NSM),
    (0x1107F, 0x11081, BidiType::NSM),
    (0x110B3, 0x110B6, BidiType::NSM),
    (0x110B9, 0x110BA, BidiType::NSM),
    (0x110C2, 0x110C2, BidiType::NSM),
    (0x11100, 0x11102, BidiType::NSM),
    (0x11127, 0x1112B, BidiType::NSM),
    (0x1112D, 0x11134, BidiType::NSM),
    (0x11173, 0x11173, BidiType::NSM),
    (0x11180, 0x11181, BidiType::NSM),
    (0x111B6, 0x111BE, BidiType::NSM),
    (0x111C9, 0x111CC, BidiType::NSM),
    (0x111CF, 0x111CF, BidiType::NSM),
    (0x1122F, 0x11231, BidiType::NSM),
    (0x11234, 0x11234, BidiType::NSM),
    (0x11236, 0x11237, BidiType::NSM),
    (0x1123E, 0x1123E, BidiType::NSM),
    (0x112DF, 0x112DF, BidiType::NSM),
    (0x112E3, 0x112EA, BidiType::NSM),
    (0x11300, 0x11301, BidiType::NSM),
    (0x1133B, 0x1133C, BidiType::NSM),
    (0x11340, 0x11340, BidiType::NSM),
    (0x11366, 0x1136C, BidiType::NSM),
    (0x11370, 0x11374, BidiType::NSM),
    (0x11438, 0x1143F, BidiType::NSM),
    (0x11442, 0x11444, BidiType::NSM),
    (0x11446, 0x11446, BidiType::NSM),
    (0x1145E, 0x1145E, BidiType::NSM),
    (0x114B3, 0x114B8, BidiType::NSM),
    (0x114BA, 0x114BA, BidiType::NSM),
    (0x114BF, 0x114C0, BidiType::NSM),
    (0x114C2, 0x114C3, BidiType::NSM),
    (0x115B2, 0x115B5, BidiType::NSM),
    (0x115BC, 0x115BD, BidiType::NSM),
    (0x115BF, 0x115C0, BidiType::NSM),
    (0x115DC, 0x115DD, BidiType::NSM),
    (0x11633, 0x1163A, BidiType::NSM),
    (0x1163D, 0x1163D, BidiType::NSM),
    (0x1163F, 0x11640, BidiType::NSM),
    (0x11660, 0x1166C, BidiType::ON),
    (0x116AB, 0x116AB, BidiType::NSM),
    (0x116AD, 0x116AD, BidiType::NSM),
    (0x116B0, 0x116B5, BidiType::NSM),
    (0x116B7, 0x116B7, BidiType::NSM),
    (0x1171D, 0x1171F, BidiType::NSM),
    (0x11722, 0x11725, BidiType::NSM),
    (0x11727, 0x1172B, BidiType::NSM),
    (0x1182F, 0x11837, BidiType::NSM),
    (0x11839, 0x1183A, BidiType::NSM),
    (0x1193B, 0x1193C, BidiType::NSM),
    (0x1193E, 0x1193E, BidiType::NSM),
    (0x11943, 0x11943, BidiType::NSM),
    (0x119D4, 0x119D7, BidiType::NSM),
    (0x119DA, 0x119DB, BidiType::NSM),
    (0x119E0, 0x119E0, BidiType::NSM),
    (0x11A01, 0x11A06, BidiType::NSM),
    (0x11A09, 0x11A0A, BidiType::NSM),
    (0x11A33, 0x11A38, BidiType::NSM),
    (0x11A3B, 0x11A3E, BidiType::NSM),
    (0x11A47, 0x11A47, BidiType::NSM),
    (0x11A51, 0x11A56, BidiType::NSM),
    (0x11A59, 0x11A5B, BidiType::NSM),
    (0x11A8A, 0x11A96, BidiType::NSM),
    (0x11A98, 0x11A99, BidiType::NSM),
    (0x11C30, 0x11C36, BidiType::NSM),
    (0x11C38, 0x11C3D, BidiType::NSM),
    (0x11C92, 0x11CA7, BidiType::NSM),
    (0x11CAA, 0x11CB0, BidiType::NSM),
    (0x11CB2, 0x11CB3, BidiType::NSM),
    (0x11CB5, 0x11CB6, BidiType::NSM),
    (0x11D31, 0x11D36, BidiType::NSM),
    (0x11D3A, 0x11D3A, BidiType::NSM),
    (0x11D3C, 0x11D3D, BidiType::NSM),
    (0x11D3F, 0x11D45, BidiType::NSM),
    (0x11D47, 0x11D47, BidiType::NSM),
    (0x11D90, 0x11D91, BidiType::NSM),
    (0x11D95, 0x11D95, BidiType::NSM),
    (0x11D97, 0x11D97, BidiType::NSM),
    (0x11EF3, 0x11EF4, BidiType::NSM),
    (0x11FD5, 0x11FDC, BidiType::ON),
    (0x11FDD, 0x11FE0, BidiType::ET),
    (0x11FE1, 0x11FF1, BidiType::ON),
    (0x16AF0, 0x16AF4, BidiType::NSM),
    (0x16B30, 0x16B36, BidiType::NSM),
    (0x16F4F, 0x16F4F, BidiType::NSM),
    (0x16F8F, 0x16F92, BidiType::NSM),
    (0x16FE2, 0x16FE2, BidiType::ON),
    (0x16FE4, 0x16FE4, BidiType::NSM),
    (0x1BC9D, 0x1BC9E, BidiType::NSM),
    (0x1BCA0, 0x1BCA3, BidiType::BN),
    (0x1CF00, 0x1CF2D, BidiType::NSM),
    (0x1CF30, 0x1CF46, BidiType::NSM),
    (0x1D167, 0x1D169, BidiType::NSM),
    (0x1D173, 0x1D17A, BidiType::BN),
    (0x1D17B, 0x1D182, BidiType::NSM),
    (0x1D185, 0x1D18B, BidiType::NSM),
    (0x1D1AA, 0x1D1AD, BidiType::NSM),
    (0x1D1E9, 0x1D1EA, BidiType::ON),
    (0x1D200, 0x1D241, BidiType::ON),
    (0x1D242, 0x1D244, BidiType::NSM),
    (0x1D245, 0x1D245, BidiType::ON),
    (0x1D300, 0x1D356, BidiType::ON),
    (0x1D6DB, 0x1D6DB, BidiType::ON),
    (0x1D715, 0x1D715, BidiType::ON),
    (0x1D74F, 0x1D74F, BidiType::ON),
    (0x1D789, 0x1D789, BidiType::ON),
    (0x1D7C3, 0x1D7C3, BidiType::ON),
    (0x1D7CE, 0x1D7FF, BidiType::EN),
    (0x1DA00, 0x1DA36, BidiType::NSM),
    (0x1DA3B, 0x1DA6C, BidiType::NSM),
    (0x1DA75, 0x1DA75, BidiType::NSM),
    (0x1DA84, 0x1DA84, BidiType::NSM),
    (0x1DA9B, 0x1DA9F, BidiType::NSM),
    (0x1DAA1, 0x1DAAF, BidiType::NSM),
    (0x1E000, 0x1E006, BidiType::NSM),
    (0x1E008, 0x1E018, BidiType::NSM),
    (0x1E01B, 0x1E021, BidiType::NSM),
    (0x1E023, 0x1E024, BidiType::NSM),
    (0x1E026, 0x1E02A, BidiType::NSM),
    (0x1E130, 0x1E136, BidiType::NSM),
    (0x1E2AE, 0x1E2AE, BidiType::NSM),
    (0x1E2EC, 0x1E2EF, BidiType::NSM),
    (0x1E2FF, 0x1E2FF, BidiType::ET),
    (0x1E800, 0x1E8CF, BidiType::R),
    (0x1E8D0, 0x1E8D6, BidiType::NSM),
    (0x1E8D7, 0x1E943, BidiType::R),
    (0x1E944, 0x1E94A, BidiType::NSM),
    (0x1E94B, 0x1EC6F, BidiType::R),
    (0x1EC70, 0x1ECBF, BidiType::AL),
    (0x1ECC0, 0x1ECFF, BidiType::R),
    (0x1ED00, 0x1ED4F, BidiType::AL),
    (0x1ED50, 0x1EDFF, BidiType::R),
    (0x1EE00, 0x1EEEF, BidiType::AL),
    (0x1EEF0, 0x1EEF1, BidiType::ON),
    (0x1EEF2, 0x1EEFF, BidiType::AL),
    (0x1EF00, 0x1EFFF, BidiType::R),
    (0x1F000, 0x1F02B, BidiType::ON),
    (0x1F030, 0x1F093, BidiType::ON),
    (0x1F0A0, 0x1F0AE, BidiType::ON),
    (0x1F0B1, 0x1F0BF, BidiType::ON),
    (0x1F0C1, 0x1F0CF, BidiType::ON),
    (0x1F0D1, 0x1F0F5, BidiType::ON),
    (0x1F100, 0x1F10A, BidiType::EN),
    (0x1F10B, 0x1F10F, BidiType::ON),
    (0x1F12F, 0x1F12F, BidiType::ON),
    (0x1F16A, 0x1F16F, BidiType::ON),
    (0x1F1AD, 0x1F1AD, BidiType::ON),
    (0x1F260, 0x1F265, BidiType::ON),
    (0x1F300, 0x1F6D7, BidiType::ON),
    (0x1F6DD, 0x1F6EC, BidiType::ON),
    (0x1F6F0, 0x1F6FC, BidiType::ON),
    (0x1F700, 0x1F773, BidiType::ON),
    (0x1F780, 0x1F7D8, BidiType::ON),
    (0x1F7E0, 0x1F7EB, BidiType::ON),
    (0x1F7F0, 0x1F7F0, BidiType::ON),
    (0x1F800, 0x1F80B, BidiType::ON),
    (0x1F810, 0x1F847, BidiType::ON),
    (0x1F850, 0x1F859, BidiType::ON),
    (0x1F860, 0x1F887, BidiType::ON),
    (0x1F890, 0x1F8AD, BidiType::ON),
    (0x1F8B0, 0x1F8B1, BidiType::ON),
    (0x1F900, 0x1FA53, BidiType::ON),
    (0x1FA60, 0x1FA6D, BidiType::ON),
    (0x1FA70, 0x1FA74, BidiType::ON),
    (0x1FA78, 0x1FA7C, BidiType::ON),
    (0x1FA80, 0x1FA86, BidiType::ON),
    (0x1FA90, 0x1FAAC, BidiType::ON),
    (0x1FAB0, 0x1FABA, BidiType::ON),
    (0x1FAC0, 0x1FAC5, BidiType::ON),
    (0x1FAD0, 0x1FAD9, BidiType::ON),
    (0x1FAE0, 0x1FAE7, BidiType::ON),
    (0x1FAF0, 0x1FAF6, BidiType::ON),
    (0x1FB00, 0x1FB92, BidiType::ON),
    (0x1FB94, 0x1FBCA, BidiType::ON),
    (0x1FBF0, 0x1FBF9, BidiType::EN),
    (0x1FFFE, 0x1FFFF, BidiType::BN),
    (0x2FFFE, 0x2FFFF, BidiType::BN),
    (0x3FFFE, 0x3FFFF, BidiType::BN),
    (0x4FFFE, 0x4FFFF, BidiType::BN),
    (0x5FFFE, 0x5FFFF, BidiType::BN),
    (0x6FFFE, 0x6FFFF, BidiType::BN),
    (0x7FFFE, 0x7FFFF, BidiType::BN),
    (0x8FFFE, 0x8FFFF, BidiType::BN),
    (0x9FFFE, 0x9FFFF, BidiType::BN),
    (0xAFFFE, 0xAFFFF, BidiType::BN),
    (0xBFFFE, 0xBFFFF, BidiType::BN),
    (0xCFFFE, 0xCFFFF, BidiType::BN),
    (0xDFFFE, 0xE00FF, BidiType::BN),
    (0xE0100, 0xE01EF, BidiType::NSM),
    (0xE01F0, 0xE0FFF, BidiType::BN),
    (0xEFFFE, 0xEFFFF, BidiType::BN),
    (0xFFFFE, 0xFFFFF, BidiType::BN),
    (0x10FFFE, 0x10FFFF, BidiType::BN),
];

/// Arabic joining type ranges. Code points not covered are non-joining.
pub(crate) static JOINING_TYPE_RANGES: &[(u32, u32, JoiningType)] = &[
    (0x00AD, 0x00AD, JoiningType::Transparent),
    (0x0300, 0x036F, JoiningType::Transparent),
    (0x0483, 0x0489, JoiningType::Transparent),
    (0x0591, 0x05BD, JoiningType::Transparent),
    (0x05BF, 0x05BF, JoiningType::Transparent),
    (0x05C1, 0x05C2, JoiningType::Transparent),
    (0x05C4, 0x05C5, JoiningType::Transparent),
    (0x05C7, 0x05C7, JoiningType::Transparent),
    (0x0600, 0x0605, JoiningType::Transparent),
    (0x0610, 0x061A, JoiningType::Transparent),
    (0x0622, 0x0625, JoiningType::Right),
    (0x0626, 0x0626, JoiningType::Dual),
    (0x0627, 0x0627, JoiningType::Right),
    (0x0628, 0x0628, JoiningType::Dual),
    (0x0629, 0x0629, JoiningType::Right),
    (0x062A, 0x062E, JoiningType::Dual),
    (0x062F, 0x0632, JoiningType::Right),
    (0x0633, 0x063A, JoiningType::Dual),
    (0x0640, 0x0640, JoiningType::Causing),
    (0x0641, 0x0647, JoiningType::Dual),
    (0x0648, 0x0648, JoiningType::Right),
    (0x0649, 0x064A, JoiningType::Dual),
    (0x064B, 0x065F, JoiningType::Transparent),
    (0x0670, 0x0670, JoiningType::Transparent),
    (0x0671, 0x0671, JoiningType::Right),
    (0x0679, 0x067B, JoiningType::Dual),
    (0x067E, 0x0680, JoiningType::Dual),
    (0x0683, 0x0684, JoiningType::Dual),
    (0x0686, 0x0687, JoiningType::Dual),
    (0x0688, 0x0688, JoiningType::Right),
    (0x068C, 0x068E, JoiningType::Right),
    (0x0691, 0x0691, JoiningType::Right),
    (0x0698, 0x0698, JoiningType::Right),
    (0x06A4, 0x06A4, JoiningType::Dual),
    (0x06A6, 0x06A6, JoiningType::Dual),
    (0x06A9, 0x06A9, JoiningType::Dual),
    (0x06AD, 0x06AD, JoiningType::Dual),
    (0x06AF, 0x06AF, JoiningType::Dual),
    (0x06B1, 0x06B1, JoiningType::Dual),
    (0x06B3, 0x06B3, JoiningType::Dual),
    (0x06BA, 0x06BA, JoiningType::Right),
    (0x06BB, 0x06BB, JoiningType::Dual),
    (0x06BE, 0x06BE, JoiningType::Dual),
    (0x06C0, 0x06C0, JoiningType::Right),
    (0x06C1, 0x06C1, JoiningType::Dual),
    (0x06C5, 0x06C9, JoiningType::Right),
    (0x06CB, 0x06CB, JoiningType::Right),
    (0x06CC, 0x06CC, JoiningType::Dual),
    (0x06D0, 0x06D0, JoiningType::Dual),
    (0x06D2, 0x06D3, JoiningType::Right),
    (0x06D6, 0x06DD, JoiningType::Transparent),
    (0x06DF, 0x06E4, JoiningType::Transparent),
    (0x06E7, 0x06E8, JoiningType::Transparent),
    (0x06EA, 0x06ED, JoiningType::Transparent),
    (0x070F, 0x070F, JoiningType::Transparent),
    (0x0711, 0x0711, JoiningType::Transparent),
    (0x0730, 0x074A, JoiningType::Transparent),
    (0x07A6, 0x07B0, JoiningType::Transparent),
    (0x07EB, 0x07F3, JoiningType::Transparent),
    (0x07FA, 0x07FA, JoiningType::Causing),
    (0x07FD, 0x07FD, JoiningType::Transparent),
    (0x0816, 0x0819, JoiningType::Transparent),
    (0x081B, 0x0823, JoiningType::Transparent),
    (0x0825, 0x0827, JoiningType::Transparent),
    (0x0829, 0x082D, JoiningType::Transparent),
    (0x0859, 0x085B, JoiningType::Transparent),
    (0x0890, 0x0891, JoiningType::Transparent),
    (0x0898, 0x089F, JoiningType::Transparent),
    (0x08CA, 0x0902, JoiningType::Transparent),
    (0x093A, 0x093A, JoiningType::Transparent),
    (0x093C, 0x093C, JoiningType::Transparent),
    (0x0941, 0x0948, JoiningType::Transparent),
    (0x094D, 0x094D, JoiningType::Transparent),
    (0x0951, 0x0957, JoiningType::Transparent),
    (0x0962, 0x0963, JoiningType::Transparent),
    (0x0981, 0x0981, JoiningType::Transparent),
    (0x09BC, 0x09BC, JoiningType::Transparent),
    (0x09C1, 0x09C4, JoiningType::Transparent),
    (0x09CD, 0x09CD, JoiningType::Transparent),
    (0x09E2, 0x09E3, JoiningType::Transparent),
    (0x09FE, 0x09FE, JoiningType::Transparent),
    (0x0A01, 0x0A02, JoiningType::Transparent),
    (0x0A3C, 0x0A3C, JoiningType::Transparent),
    (0x0A41, 0x0A42, JoiningType::Transparent),
    (0x0A47, 0x0A48, JoiningType::Transparent),
    (0x0A4B, 0x0A4D, JoiningType::Transparent),
    (0x0A51, 0x0A51, JoiningType::Transparent),
    (0x0A70, 0x0A71, JoiningType::Transparent),
    (0x0A75, 0x0A75, JoiningType::Transparent),
    (0x0A81, 0x0A82, JoiningType::Transparent),
    (0x0ABC, 0x0ABC, JoiningType::Transparent),
    (0x0AC1, 0x0AC5, JoiningType::Transparent),
    (0x0AC7, 0x0AC8, JoiningType::Transparent),
    (0x0ACD, 0x0ACD, JoiningType::Transparent),
    (0x0AE2, 0x0AE3, JoiningType::Transparent),
    (0x0AFA, 0x0AFF, JoiningType::Transparent),
    (0x0B01, 0x0B01, JoiningType::Transparent),
    (0x0B3C, 0x0B3C, JoiningType::Transparent),
    (0x0B3F, 0x0B3F, JoiningType::Transparent),
    (0x0B41, 0x0B44, JoiningType::Transparent),
    (0x0B4D, 0x0B4D, JoiningType::Transparent),
    (0x0B55, 0x0B56, JoiningType::Transparent),
    (0x0B62, 0x0B63, JoiningType::Transparent),
    (0x0B82, 0x0B82, JoiningType::Transparent),
    (0x0BC0, 0x0BC0, JoiningType::Transparent),
    (0x0BCD, 0x0BCD, JoiningType::Transparent),
    (0x0C00, 0x0C00, JoiningType::Transparent),
    (0x0C04, 0x0C04, JoiningType::Transparent),
    (0x0C3C, 0x0C3C, JoiningType::Transparent),
    (0x0C3E, 0x0C40, JoiningType::Transparent),
    (0x0C46, 0x0C48, JoiningType::Transparent),
    (0x0C4A, 0x0C4D, JoiningType::Transparent),
    (0x0C55, 0x0C56, JoiningType::Transparent),
    (0x0C62, 0x0C63, JoiningType::Transparent),
    (0x0C81, 0x0C81, JoiningType::Transparent),
    (0x0CBC, 0x0CBC, JoiningType::Transparent),
    (0x0CBF, 0x0CBF, JoiningType::Transparent),
    (0x0CC6, 0x0CC6, JoiningType::Transparent),
    (0x0CCC, 0x0CCD, JoiningType::Transparent),
    (0x0CE2, 0x0CE3, JoiningType::Transparent),
    (0x0D00, 0x0D01, JoiningType::Transparent),
    (0x0D3B, 0x0D3C, JoiningType::Transparent),
    (0x0D41, 0x0D44, JoiningType::Transparent),
    (0x0D4D, 0x0D4D, JoiningType::Transparent),
    (0x0D62, 0x0D63, JoiningType::Transparent),
    (0x0D81, 0x0D81, JoiningType::Transparent),
    (0x0DCA, 0x0DCA, JoiningType::Transparent),
    (0x0DD2, 0x0DD4, JoiningType::Transparent),
    (0x0DD6, 0x0DD6, JoiningType::Transparent),
    (0x0E31, 0x0E31, JoiningType::Transparent),
    (0x0E34, 0x0E3A, JoiningType::Transparent),
    (0x0E47, 0x0E4E, JoiningType::Transparent),
    (0x0EB1, 0x0EB1, JoiningType::Transparent),
    (0x0EB4, 0x0EBC, JoiningType::Transparent),
    (0x0EC8, 0x0ECD, JoiningType::Transparent),
    (0x0F18, 0x0F19, JoiningType::Transparent),
    (0x0F35, 0x0F35, JoiningType::Transparent),
    (0x0F37, 0x0F37, JoiningType::Transparent),
    (0x0F39, 0x0F39, JoiningType::Transparent),
    (0x0F71, 0x0F7E, JoiningType::Transparent),
    (0x0F80, 0x0F84, JoiningType::Transparent),
    (0x0F86, 0x0F87, JoiningType::Transparent),
    (0x0F8D, 0x0F97, JoiningType::Transparent),
    (0x0F99, 0x0FBC, JoiningType::Transparent),
    (0x0FC6, 0x0FC6, JoiningType::Transparent),
    (0x102D, 0x1030, JoiningType::Transparent),
    (0x1032, 0x1037, JoiningType::Transparent),
    (0x1039, 0x103A, JoiningType::Transparent),
    (0x103D, 0x103E, JoiningType::Transparent),
    (0x1058, 0x1059, JoiningType::Transparent),
    (0x105E, 0x1060, JoiningType::Transparent),
    (0x1071, 0x1074, JoiningType::Transparent),
    (0x1082, 0x1082, JoiningType::Transparent),
    (0x1085, 0x1086, JoiningType::Transparent),
    (0x108D, 0x108D, JoiningType::Transparent),
    (0x109D, 0x109D, JoiningType::Transparent),
    (0x135D, 0x135F, JoiningType::Transparent),
    (0x1712, 0x1714, JoiningType::Transparent),
    (0x1732, 0x1733, JoiningType::Transparent),
    (0x1752, 0x1753, JoiningType::Transparent),
    (0x1772, 0x1773, JoiningType::Transparent),
    (0x17B4, 0x17B5, JoiningType::Transparent),
    (0x17B7, 0x17BD, JoiningType::Transparent),
    (0x17C6, 0x17C6, JoiningType::Transparent),
    (0x17C9, 0x17D3, JoiningType::Transparent),
    (0x17DD, 0x17DD, JoiningType::Transparent),
    (0x180B, 0x180F, JoiningType::Transparent),
    (0x1885, 0x1886, JoiningType::Transparent),
    (0x18A9, 0x18A9, JoiningType::Transparent),
    (0x1920, 0x1922, JoiningType::Transparent),
    (0x1927, 0x1928, JoiningType::Transparent),
    (0x1932, 0x1932, JoiningType::Transparent),
    (0x1939, 0x193B, JoiningType::Transparent),
    (0x1A17, 0x1A18, JoiningType::Transparent),
    (0x1A1B, 0x1A1B, JoiningType::Transparent),
    (0x1A56, 0x1A56, JoiningType::Transparent),
    (0x1A58, 0x1A5E, JoiningType::Transparent),
    (0x1A60, 0x1A60, JoiningType::Transparent),
    (0x1A62, 0x1A62, JoiningType::Transparent),
    (0x1A65, 0x1A6C, JoiningType::Transparent),
    (0x1A73, 0x1A7C, JoiningType::Transparent),
    (0x1A7F, 0x1A7F, JoiningType::Transparent),
    (0x1AB0, 0x1ACE, JoiningType::Transparent),
    (0x1B00, 0x1B03, JoiningType::Transparent),
    (0x1B34, 0x1B34, JoiningType::Transparent),
    (0x1B36, 0x1B3A, JoiningType::Transparent),
    (0x1B3C, 0x1B3C, JoiningType::Transparent),
    (0x1B42, 0x1B42, JoiningType::Transparent),
    (0x1B6B, 0x1B73, JoiningType::Transparent),
    (0x1B80, 0x1B81, JoiningType::Transparent),
    (0x1BA2, 0x1BA5, JoiningType::Transparent),
    (0x1BA8, 0x1BA9, JoiningType::Transparent),
    (0x1BAB, 0x1BAD, JoiningType::Transparent),
    (0x1BE6, 0x1BE6, JoiningType::Transparent),
    (0x1BE8, 0x1BE9, JoiningType::Transparent),
    (0x1BED, 0x1BED, JoiningType::Transparent),
    (0x1BEF, 0x1BF1, JoiningType::Transparent),
    (0x1C2C, 0x1C33, JoiningType::Transparent),
    (0x1C36, 0x1C37, JoiningType::Transparent),
    (0x1CD0, 0x1CD2, JoiningType::Transparent),
    (0x1CD4, 0x1CE0, JoiningType::Transparent),
    (0x1CE2, 0x1CE8, JoiningType::Transparent),
    (0x1CED, 0x1CED, JoiningType::Transparent),
    (0x1CF4, 0x1CF4, JoiningType::Transparent),
    (0x1CF8, 0x1CF9, JoiningType::Transparent),
    (0x1DC0, 0x1DFF, JoiningType::Transparent),
    (0x200B, 0x200B, JoiningType::Transparent),
    (0x200D, 0x200D, JoiningType::Causing),
    (0x2060, 0x2064, JoiningType::Transparent),
    (0x206A, 0x206F, JoiningType::Transparent),
    (0x20D0, 0x20F0, JoiningType::Transparent),
    (0x2CEF, 0x2CF1, JoiningType::Transparent),
    (0x2D7F, 0x2D7F, JoiningType::Transparent),
    (0x2DE0, 0x2DFF, JoiningType::Transparent),
    (0x302A, 0x302D, JoiningType::Transparent),
    (0x3099, 0x309A, JoiningType::Transparent),
    (0xA66F, 0xA672, JoiningType::Transparent),
    (0xA674, 0xA67D, JoiningType::Transparent),
    (0xA69E, 0xA69F, JoiningType::Transparent),
    (0xA6F0, 0xA6F1, JoiningType::Transparent),
    (0xA802, 0xA802, JoiningType::Transparent),
    (0xA806, 0xA806, JoiningType::Transparent),
    (0xA80B, 0xA80B, JoiningType::Transparent),
    (0xA825, 0xA826, JoiningType::Transparent),
    (0xA82C, 0xA82C, JoiningType::Transparent),
    (0xA8C4, 0xA8C5, JoiningType::Transparent),
    (0xA8E0, 0xA8F1, JoiningType::Transparent),
    (0xA8FF, 0xA8FF, JoiningType::Transparent),
    (0xA926, 0xA92D, JoiningType::Transparent),
    (0xA947, 0xA951, JoiningType::Transparent),
    (0xA980, 0xA982, JoiningType::Transparent),
    (0xA9B3, 0xA9B3, JoiningType::Transparent),
    (0xA9B6, 0xA9B9, JoiningType::Transparent),
    (0xA9BC, 0xA9BD, JoiningType::Transparent),
    (0xA9E5, 0xA9E5, JoiningType::Transparent),
    (0xAA29, 0xAA2E, JoiningType::Transparent),
    (0xAA31, 0xAA32, JoiningType::Transparent),
    (0xAA35, 0xAA36, JoiningType::Transparent),
    (0xAA43, 0xAA43, JoiningType::Transparent),
    (0xAA4C, 0xAA4C, JoiningType::Transparent),
    (0xAA7C, 0xAA7C, JoiningType::Transparent),
    (0xAAB0, 0xAAB0, JoiningType::Transparent),
    (0xAAB2, 0xAAB4, JoiningType::Transparent),
    (0xAAB7, 0xAAB8, JoiningType::Transparent),
    (0xAABE, 0xAABF, JoiningType::Transparent),
    (0xAAC1, 0xAAC1, JoiningType::Transparent),
    (0xAAEC, 0xAAED, JoiningType::Transparent),
    (0xAAF6, 0xAAF6, JoiningType::Transparent),
    (0xABE5, 0xABE5, JoiningType::Transparent),
    (0xABE8, 0xABE8, JoiningType::Transparent),
    (0xABED, 0xABED, JoiningType::Transparent),
    (0xFB1E, 0xFB1E, JoiningType::Transparent),
    (0xFE00, 0xFE0F, JoiningType::Transparent),
    (0xFE20, 0xFE2F, JoiningType::Transparent),
    (0xFEFF, 0xFEFF, JoiningType::Transparent),
    (0xFFF9, 0xFFFB, JoiningType::Transparent),
    (0x101FD, 0x101FD, JoiningType::Transparent),
    (0x102E0, 0x102E0, JoiningType::Transparent),
    (0x10376, 0x1037A, JoiningType::Transparent),
    (0x10A01, 0x10A03, JoiningType::Transparent),
    (0x10A05, 0x10A06, JoiningType::Transparent),
    (0x10A0C, 0x10A0F, JoiningType::Transparent),
    (0x10A38, 0x10A3A, JoiningType::Transparent),
    (0x10A3F, 0x10A3F, JoiningType::Transparent),
    (0x10AE5, 0x10AE6, JoiningType::Transparent),
    (0x10D24, 0x10D27, JoiningType::Transparent),
    (0x10EAB, 0x10EAC, JoiningType::Transparent),
    (0x10F46, 0x10F50, JoiningType::Transparent),
    (0x10F82, 0x10F85, JoiningType::Transparent),
    (0x11001, 0x11001, JoiningType::Transparent),
    (0x11038, 0x11046, JoiningType::Transparent),
    (0x11070, 0x11070, JoiningType::Transparent),
    (0x11073, 0x11074, JoiningType::Transparent),
    (0x1107F, 0x11081, JoiningType::Transparent),
    (0x110B3, 0x110B6, JoiningType::Transparent),
    (0x110B9, 0x110BA, JoiningType::Transparent),
    (0x110BD, 0x110BD, JoiningType::Transparent),
    (0x110C2, 0x110C2, JoiningType::Transparent),
    (0x110CD, 0x110CD, JoiningType::Transparent),
    (0x11100, 0x11102, JoiningType::Transparent),
    (0x11127, 0x1112B, JoiningType::Transparent),
    (0x1112D, 0x11134, JoiningType::Transparent),
    (0x11173, 0x11173, JoiningType::Transparent),
    (0x11180, 0x11181, JoiningType::Transparent),
    (0x111B6, 0x111BE, JoiningType::Transparent),
    (0x111C9, 0x111CC, JoiningType::Transparent),
    (0x111CF, 0x111CF, JoiningType::Transparent),
    (0x1122F, 0x11231, JoiningType::Transparent),
    (0x11234, 0x11234, JoiningType::Transparent),
    (0x11236, 0x11237, JoiningType::Transparent),
    (0x1123E, 0x1123E, JoiningType::Transparent),
    (0x112DF, 0x112DF, JoiningType::Transparent),
    (0x112E3, 0x112EA, JoiningType::Transparent),
    (0x11300, 0x11301, JoiningType::Transparent),
    (0x1133B, 0x1133C, JoiningType::Transparent),
    (0x11340, 0x11340, JoiningType::Transparent),
    (0x11366, 0x1136C, JoiningType::Transparent),
    (0x11370, 0x11374, JoiningType::Transparent),
    (0x11438, 0x1143F, JoiningType::Transparent),
    (0x11442, 0x11444, JoiningType::Transparent),
    (0x11446, 0x11446, JoiningType::Transparent),
    (0x1145E, 0x1145E, JoiningType::Transparent),
    (0x114B3, 0x114B8, JoiningType::Transparent),
    (0x114BA, 0x114BA, JoiningType::Transparent),
    (0x114BF, 0x114C0, JoiningType::Transparent),
    (0x114C2, 0x114C3, JoiningType::Transparent),
    (0x115B2, 0x115B5, JoiningType::Transparent),
    (0x115BC, 0x115BD, JoiningType::Transparent),
    (0x115BF, 0x115C0, JoiningType::Transparent),
    (0x115DC, 0x115DD, JoiningType::Transparent),
    (0x11633, 0x1163A, JoiningType::Transparent),
    (0x1163D, 0x1163D, JoiningType::Transparent),
    (0x1163F, 0x11640, JoiningType::Transparent),
    (0x116AB, 0x116AB, JoiningType::Transparent),
    (0x116AD, 0x116AD, JoiningType::Transparent),
    (0x116B0, 0x116B5, JoiningType::Transparent),
    (0x116B7, 0x116B7, JoiningType::Transparent),
    (0x1171D, 0x1171F, JoiningType::Transparent),
    (0x11722, 0x11725, JoiningType::Transparent),
    (0x11727, 0x1172B, JoiningType::Transparent),
    (0x1182F, 0x11837, JoiningType::Transparent),
    (0x11839, 0x1183A, JoiningType::Transparent),
    (0x1193B, 0x1193C, JoiningType::Transparent),
    (0x1193E, 0x1193E, JoiningType::Transparent),
    (0x11943, 0x11943, JoiningType::Transparent),
    (0x119D4, 0x119D7, JoiningType::Transparent),
    (0x119DA, 0x119DB, JoiningType::Transparent),
    (0x119E0, 0x119E0, JoiningType::Transparent),
    (0x11A01, 0x11A0A, JoiningType::Transparent),
    (0x11A33, 0x11A38, JoiningType::Transparent),
    (0x11A3B, 0x11A3E, JoiningType::Transparent),
    (0x11A47, 0x11A47, JoiningType::Transparent),
    (0x11A51, 0x11A56, JoiningType::Transparent),
    (0x11A59, 0x11A5B, JoiningType::Transparent),
    (0x11A8A, 0x11A96, JoiningType::Transparent),
    (0x11A98, 0x11A99, JoiningType::Transparent),
    (0x11C30, 0x11C36, JoiningType::Transparent),
    (0x11C38, 0x11C3D, JoiningType::Transparent),
    (0x11C3F, 0x11C3F, JoiningType::Transparent),
    (0x11C92, 0x11CA7, JoiningType::Transparent),
    (0x11CAA, 0x11CB0, JoiningType::Transparent),
    (0x11CB2, 0x11CB3, JoiningType::Transparent),
    (0x11CB5, 0x11CB6, JoiningType::Transparent),
    (0x11D31, 0x11D36, JoiningType::Transparent),
    (0x11D3A, 0x11D3A, JoiningType::Transparent),
    (0x11D3C, 0x11D3D, JoiningType::Transparent),
    (0x11D3F, 0x11D45, JoiningType::Transparent),
    (0x11D47, 0x11D47, JoiningType::Transparent),
    (0x11D90, 0x11D91, JoiningType::Transparent),
    (0x11D95, 0x11D95, JoiningType::Transparent),
    (0x11D97, 0x11D97, JoiningType::Transparent),
    (0x11EF3, 0x11EF4, JoiningType::Transparent),
    (0x13430, 0x13438, JoiningType::Transparent),
    (0x16AF0, 0x16AF4, JoiningType::Transparent),
    (0x16B30, 0x16B36, JoiningType::Transparent),
    (0x16F4F, 0x16F4F, JoiningType::Transparent),
    (0x16F8F, 0x16F92, JoiningType::Transparent),
    (0x16FE4, 0x16FE4, JoiningType::Transparent),
    (0x1BC9D, 0x1BC9E, JoiningType::Transparent),
    (0x1BCA0, 0x1BCA3, JoiningType::Transparent),
    (0x1CF00, 0x1CF2D, JoiningType::Transparent),
    (0x1CF30, 0x1CF46, JoiningType::Transparent),
    (0x1D167, 0x1D169, JoiningType::Transparent),
    (0x1D173, 0x1D182, JoiningType::Transparent),
    (0x1D185, 0x1D18B, JoiningType::Transparent),
    (0x1D1AA, 0x1D1AD, JoiningType::Transparent),
    (0x1D242, 0x1D244, JoiningType::Transparent),
    (0x1DA00, 0x1DA36, JoiningType::Transparent),
    (0x1DA3B, 0x1DA6C, JoiningType::Transparent),
    (0x1DA75, 0x1DA75, JoiningType::Transparent),
    (0x1DA84, 0x1DA84, JoiningType::Transparent),
    (0x1DA9B, 0x1DA9F, JoiningType::Transparent),
    (0x1DAA1, 0x1DAAF, JoiningType::Transparent),
    (0x1E000, 0x1E006, JoiningType::Transparent),
    (0x1E008, 0x1E018, JoiningType::Transparent),
    (0x1E01B, 0x1E021, JoiningType::Transparent),
    (0x1E023, 0x1E024, JoiningType::Transparent),
    (0x1E026, 0x1E02A, JoiningType::Transparent),
    (0x1E130, 0x1E136, JoiningType::Transparent),
    (0x1E2AE, 0x1E2AE, JoiningType::Transparent),
    (0x1E2EC, 0x1E2EF, JoiningType::Transparent),
    (0x1E8D0, 0x1E8D6, JoiningType::Transparent),
    (0x1E944, 0x1E94A, JoiningType::Transparent),
    (0xE0001, 0xE0001, JoiningType::Transparent),
    (0xE0020, 0xE007F, JoiningType::Transparent),
    (0xE0100, 0xE01EF, JoiningType::Transparent),
];

/// Positional presentation forms: `(base, isolated, final, initial, medial)`, `0` where absent.
pub(crate) static POSITIONAL_FORMS: &[(u32, u32, u32, u32, u32)] = &[
    (0x0621, 0xFE80, 0x0000, 0x0000, 0x0000),
    (0x0622, 0xFE81, 0xFE82, 0x0000, 0x0000),
    (0x0623, 0xFE83, 0xFE84, 0x0000, 0x0000),
    (0x0624, 0xFE85, 0xFE86, 0x0000, 0x0000),
    (0x0625, 0xFE87, 0xFE88, 0x0000, 0x0000),
    (0x0626, 0xFE89, 0xFE8A, 0xFE8B, 0xFE8C),
    (0x0627, 0xFE8D, 0xFE8E, 0x0000, 0x0000),
    (0x0628, 0xFE8F, 0xFE90, 0xFE91, 0xFE92),
    (0x0629, 0xFE93, 0xFE94, 0x0000, 0x0000),
    (0x062A, 0xFE95, 0xFE96, 0xFE97, 0xFE98),
    (0x062B, 0xFE99, 0xFE9A, 0xFE9B, 0xFE9C),
    (0x062C, 0xFE9D, 0xFE9E, 0xFE9F, 0xFEA0),
    (0x062D, 0xFEA1, 0xFEA2, 0xFEA3, 0xFEA4),
    (0x062E, 0xFEA5, 0xFEA6, 0xFEA7, 0xFEA8),
    (0x062F, 0xFEA9, 0xFEAA, 0x0000, 0x0000),
    (0x0630, 0xFEAB, 0xFEAC, 0x0000, 0x0000),
    (0x0631, 0xFEAD, 0xFEAE, 0x0000, 0x0000),
    (0x0632, 0xFEAF, 0xFEB0, 0x0000, 0x0000),
    (0x0633, 0xFEB1, 0xFEB2, 0xFEB3, 0xFEB4),
    (0x0634, 0xFEB5, 0xFEB6, 0xFEB7, 0xFEB8),
    (0x0635, 0xFEB9, 0xFEBA, 0xFEBB, 0xFEBC),
    (0x0636, 0xFEBD, 0xFEBE, 0xFEBF, 0xFEC0),
    (0x0637, 0xFEC1, 0xFEC2, 0xFEC3, 0xFEC4),
    (0x0638, 0xFEC5, 0xFEC6, 0xFEC7, 0xFEC8),
    (0x0639, 0xFEC9, 0xFECA, 0xFECB, 0xFECC),
    (0x063A, 0xFECD, 0xFECE, 0xFECF, 0xFED0),
    (0x0641, 0xFED1, 0xFED2, 0xFED3, 0xFED4),
    (0x0642, 0xFED5, 0xFED6, 0xFED7, 0xFED8),
    (0x0643, 0xFED9, 0xFEDA, 0xFEDB, 0xFEDC),
    (0x0644, 0xFEDD, 0xFEDE, 0xFEDF, 0xFEE0),
    (0x0645, 0xFEE1, 0xFEE2, 0xFEE3, 0xFEE4),
    (0x0646, 0xFEE5, 0xFEE6, 0xFEE7, 0xFEE8),
    (0x0647, 0xFEE9, 0xFEEA, 0xFEEB, 0xFEEC),
    (0x0648, 0xFEED, 0xFEEE, 0x0000, 0x0000),
    (0x0649, 0xFEEF, 0xFEF0, 0xFBE8, 0xFBE9),
    (0x064A, 0xFEF1, 0xFEF2, 0xFEF3, 0xFEF4),
    (0x0671, 0xFB50, 0xFB51, 0x0000, 0x0000),
    (0x0677, 0xFBDD, 0x0000, 0x0000, 0x0000),
    (0x0679, 0xFB66, 0xFB67, 0xFB68, 0xFB69),
    (0x067A, 0xFB5E, 0xFB5F, 0xFB60, 0xFB61),
    (0x067B, 0xFB52, 0xFB53, 0xFB54, 0xFB55),
    (0x067E, 0xFB56, 0xFB57, 0xFB58, 0xFB59),
    (0x067F, 0xFB62, 0xFB63, 0xFB64, 0xFB65),
    (0x0680, 0xFB5A, 0xFB5B, 0xFB5C, 0xFB5D),
    (0x0683, 0xFB76, 0xFB77, 0xFB78, 0xFB79),
    (0x0684, 0xFB72, 0xFB73, 0xFB74, 0xFB75),
    (0x0686, 0xFB7A, 0xFB7B, 0xFB7C, 0xFB7D),
    (0x0687, 0xFB7E, 0xFB7F, 0xFB80, 0xFB81),
    (0x0688, 0xFB88, 0xFB89, 0x0000, 0x0000),
    (0x068C, 0xFB84, 0xFB85, 0x0000, 0x0000),
    (0x068D, 0xFB82, 0xFB83, 0x0000, 0x0000),
    (0x068E, 0xFB86, 0xFB87, 0x0000, 0x0000),
    (0x0691, 0xFB8C, 0xFB8D, 0x0000, 0x0000),
    (0x0698, 0xFB8A, 0xFB8B, 0x0000, 0x0000),
    (0x06A4, 0xFB6A, 0xFB6B, 0xFB6C, 0xFB6D),
    (0x06A6, 0xFB6E, 0xFB6F, 0xFB70, 0xFB71),
    (0x06A9, 0xFB8E, 0xFB8F, 0xFB90, 0xFB91),
    (0x06AD, 0xFBD3, 0xFBD4, 0xFBD5, 0xFBD6),
    (0x06AF, 0xFB92, 0xFB93, 0xFB94, 0xFB95),
    (0x06B1, 0xFB9A, 0xFB9B, 0xFB9C, 0xFB9D),
    (0x06B3, 0xFB96, 0xFB97, 0xFB98, 0xFB99),
    (0x06BA, 0xFB9E, 0xFB9F, 0x0000, 0x0000),
    (0x06BB, 0xFBA0, 0xFBA1, 0xFBA2, 0xFBA3),
    (0x06BE, 0xFBAA, 0xFBAB, 0xFBAC, 0xFBAD),
    (0x06C0, 0xFBA4, 0xFBA5, 0x0000, 0x0000),
    (0x06C1, 0xFBA6, 0xFBA7, 0xFBA8, 0xFBA9),
    (0x06C5, 0xFBE0, 0xFBE1, 0x0000, 0x0000),
    (0x06C6, 0xFBD9, 0xFBDA, 0x0000, 0x0000),
    (0x06C7, 0xFBD7, 0xFBD8, 0x0000, 0x0000),
    (0x06C8, 0xFBDB, 0xFBDC, 0x0000, 0x0000),
    (0x06C9, 0xFBE2, 0xFBE3, 0x0000, 0x0000),
    (0x06CB, 0xFBDE, 0xFBDF, 0x0000, 0x0000),
    (0x06CC, 0xFBFC, 0xFBFD, 0xFBFE, 0xFBFF),
    (0x06D0, 0xFBE4, 0xFBE5, 0xFBE6, 0xFBE7),
    (0x06D2, 0xFBAE, 0xFBAF, 0x0000, 0x0000),
    (0x06D3, 0xFBB0, 0xFBB1, 0x0000, 0x0000),
];
/// Paired brackets as `(opening, closing)`, sorted by opening code point.
pub(crate) static BRACKET_PAIRS: &[(u32, u32)] = &[
    (0x0028, 0x0029),
    (0x005B, 0x005D),
    (0x007B, 0x007D),
    (0x0F3A, 0x0F3B),
    (0x0F3C, 0x0F3D),
    (0x169B, 0x169C),
    (0x2045, 0x2046),
    (0x207D, 0x207E),
    (0x208D, 0x208E),
    (0x2308, 0x2309),
    (0x230A, 0x230B),
    (0x2329, 0x232A),
    (0x2768, 0x2769),
    (0x276A, 0x276B),
    (0x276C, 0x276D),
    (0x276E, 0x276F),
    (0x2770, 0x2771),
    (0x2772, 0x2773),
    (0x2774, 0x2775),
    (0x27C5, 0x27C6),
    (0x27E6, 0x27E7),
    (0x27E8, 0x27E9),
    (0x27EA, 0x27EB),
    (0x27EC, 0x27ED),
    (0x27EE, 0x27EF),
    (0x2983, 0x2984),
    (0x2985, 0x2986),
    (0x2987, 0x2988),
    (0x2989, 0x298A),
    (0x298B, 0x298C),
    (0x298D, 0x298E),
    (0x298F, 0x2990),
    (0x2991, 0x2992),
    (0x2993, 0x2994),
    (0x2995, 0x2996),
    (0x2997, 0x2998),
    (0x29D8, 0x29D9),
    (0x29DA, 0x29DB),
    (0x29FC, 0x29FD),
    (0x2E22, 0x2E23),
    (0x2E24, 0x2E25),
    (0x2E26, 0x2E27),
    (0x2E28, 0x2E29),
    (0x2E55, 0x2E56),
    (0x2E57, 0x2E58),
    (0x2E59, 0x2E5A),
    (0x2E5B, 0x2E5C),
    (0x3008, 0x3009),
    (0x300A, 0x300B),
    (0x300C, 0x300D),
    (0x300E, 0x300F),
    (0x3010, 0x3011),
    (0x3014, 0x3015),
    (0x3016, 0x3017),
    (0x3018, 0x3019),
    (0x301A, 0x301B),
    (0xFE59, 0xFE5A),
    (0xFE5B, 0xFE5C),
    (0xFE5D, 0xFE5E),
    (0xFF08, 0xFF09),
    (0xFF3B, 0xFF3D),
    (0xFF5B, 0xFF5D),
    (0xFF5F, 0xFF60),
    (0xFF62, 0xFF63),
];

/// Mirrored glyph counterparts, sorted by source code point.
pub(crate) static MIRROR_PAIRS: &[(u32, u32)] = &[
    (0x0028, 0x0029),
    (0x0029, 0x0028),
    (0x003C, 0x003E),
    (0x003E, 0x003C),
    (0x005B, 0x005D),
    (0x005D, 0x005B),
    (0x007B, 0x007D),
    (0x007D, 0x007B),
    (0x00AB, 0x00BB),
    (0x00BB, 0x00AB),
    (0x0F3A, 0x0F3B),
    (0x0F3B, 0x0F3A),
    (0x0F3C, 0x0F3D),
    (0x0F3D, 0x0F3C),
    (0x169B, 0x169C),
    (0x169C, 0x169B),
    (0x2039, 0x203A),
    (0x203A, 0x2039),
    (0x2045, 0x2046),
    (0x2046, 0x2045),
    (0x207D, 0x207E),
    (0x207E, 0x207D),
    (0x208D, 0x208E),
    (0x208E, 0x208D),
    (0x2208, 0x220B),
    (0x2209, 0x220C),
    (0x220A, 0x220D),
    (0x220B, 0x2208),
    (0x220C, 0x2209),
    (0x220D, 0x220A),
    (0x2215, 0x29F5),
    (0x223C, 0x223D),
    (0x223D, 0x223C),
    (0x2243, 0x22CD),
    (0x2252, 0x2253),
    (0x2253, 0x2252),
    (0x2254, 0x2255),
    (0x2255, 0x2254),
    (0x2264, 0x2265),
    (0x2265, 0x2264),
    (0x2266, 0x2267),
    (0x2267, 0x2266),
    (0x2268, 0x2269),
    (0x2269, 0x2268),
    (0x226A, 0x226B),
    (0x226B, 0x226A),
    (0x226E, 0x226F),
    (0x226F, 0x226E),
    (0x2270, 0x2271),
    (0x2271, 0x2270),
    (0x2272, 0x2273),
    (0x2273, 0x2272),
    (0x2274, 0x2275),
    (0x2275, 0x2274),
    (0x2276, 0x2277),
    (0x2277, 0x2276),
    (0x2278, 0x2279),
    (0x2279, 0x2278),
    (0x227A, 0x227B),
    (0x227B, 0x227A),
    (0x227C, 0x227D),
    (0x227D, 0x227C),
    (0x227E, 0x227F),
    (0x227F, 0x227E),
    (0x2280, 0x2281),
    (0x2281, 0x2280),
    (0x2282, 0x2283),
    (0x2283, 0x2282),
    (0x2284, 0x2285),
    (0x2285, 0x2284),
    (0x2286, 0x2287),
    (0x2287, 0x2286),
    (0x2288, 0x2289),
    (0x2289, 0x2288),
    (0x228A, 0x228B),
    (0x228B, 0x228A),
    (0x228F, 0x2290),
    (0x2290, 0x228F),
    (0x2291, 0x2292),
    (0x2292, 0x2291),
    (0x2298, 0x29B8),
    (0x22A2, 0x22A3),
    (0x22A3, 0x22A2),
    (0x22A6, 0x2ADE),
    (0x22A8, 0x2AE4),
    (0x22A9, 0x2AE3),
    (0x22AB, 0x2AE5),
    (0x22B0, 0x22B1),
    (0x22B1, 0x22B0),
    (0x22B2, 0x22B3),
    (0x22B3, 0x22B2),
    (0x22B4, 0x22B5),
    (0x22B5, 0x22B4),
    (0x22B6, 0x22B7),
    (0x22B7, 0x22B6),
    (0x22C9, 0x22CA),
    (0x22CA, 0x22C9),
    (0x22CB, 0x22CC),
    (0x22CC, 0x22CB),
    (0x22CD, 0x2243),
    (0x22D0, 0x22D1),
    (0x22D1, 0x22D0),
    (0x22D6, 0x22D7),
    (0x22D7, 0x22D6),
    (0x22D8, 0x22D9),
    (0x22D9, 0x22D8),
    (0x22DA, 0x22DB),
    (0x22DB, 0x22DA),
    (0x22DC, 0x22DD),
    (0x22DD, 0x22DC),
    (0x22DE, 0x22DF),
    (0x22DF, 0x22DE),
    (0x22E0, 0x22E1),
    (0x22E1, 0x22E0),
    (0x22E2, 0x22E3),
    (0x22E3, 0x22E2),
    (0x22E4, 0x22E5),
    (0x22E5, 0x22E4),
    (0x22E6, 0x22E7),
    (0x22E7, 0x22E6),
    (0x22E8, 0x22E9),
    (0x22E9, 0x22E8),
    (0x22EA, 0x22EB),
    (0x22EB, 0x22EA),
    (0x22EC, 0x22ED),
    (0x22ED, 0x22EC),
    (0x22F0, 0x22F1),
    (0x22F1, 0x22F0),
    (0x2308, 0x2309),
    (0x2309, 0x2308),
    (0x230A, 0x230B),
    (0x230B, 0x230A),
    (0x2329, 0x232A),
    (0x232A, 0x2329),
    (0x2768, 0x2769),
    (0x2769, 0x2768),
    (0x276A, 0x276B),
    (0x276B, 0x276A),
    (0x276C, 0x276D),
    (0x276D, 0x276C),
    (0x276E, 0x276F),
    (0x276F, 0x276E),
    (0x2770, 0x2771),
    (0x2771, 0x2770),
    (0x2772, 0x2773),
    (0x2773, 0x2772),
    (0x2774, 0x2775),
    (0x2775, 0x2774),
    (0x27C3, 0x27C4),
    (0x27C4, 0x27C3),
    (0x27C5, 0x27C6),
    (0x27C6, 0x27C5),
    (0x27C8, 0x27C9),
    (0x27C9, 0x27C8),
    (0x27D5, 0x27D6),
    (0x27D6, 0x27D5),
    (0x27DD, 0x27DE),
    (0x27DE, 0x27DD),
    (0x27E2, 0x27E3),
    (0x27E3, 0x27E2),
    (0x27E4, 0x27E5),
    (0x27E5, 0x27E4),
    (0x27E6, 0x27E7),
    (0x27E7, 0x27E6),
    (0x27E8, 0x27E9),
    (0x27E9, 0x27E8),
    (0x27EA, 0x27EB),
    (0x27EB, 0x27EA),
    (0x27EC, 0x27ED),
    (0x27ED, 0x27EC),
    (0x27EE, 0x27EF),
    (0x27EF, 0x27EE),
    (0x2983, 0x2984),
    (0x2984, 0x2983),
    (0x2985, 0x2986),
    (0x2986, 0x2985),
    (0x2987, 0x2988),
    (0x2988, 0x2987),
    (0x2989, 0x298A),
    (0x298A, 0x2989),
    (0x298B, 0x298C),
    (0x298C, 0x298B),
    (0x298D, 0x298E),
    (0x298E, 0x298D),
    (0x298F, 0x2990),
    (0x2990, 0x298F),
    (0x2991, 0x2992),
    (0x2992, 0x2991),
    (0x2993, 0x2994),
    (0x2994, 0x2993),
    (0x2995, 0x2996),
    (0x2996, 0x2995),
    (0x2997, 0x2998),
    (0x2998, 0x2997),
    (0x29B8, 0x2298),
    (0x29C0, 0x29C1),
    (0x29C1, 0x29C0),
    (0x29C4, 0x29C5),
    (0x29C5, 0x29C4),
    (0x29CF, 0x29D0),
    (0x29D0, 0x29CF),
    (0x29D1, 0x29D2),
    (0x29D2, 0x29D1),
    (0x29D4, 0x29D5),
    (0x29D5, 0x29D4),
    (0x29D8, 0x29D9),
    (0x29D9, 0x29D8),
    (0x29DA, 0x29DB),
    (0x29DB, 0x29DA),
    (0x29F5, 0x2215),
    (0x29FC, 0x29FD),
    (0x29FD, 0x29FC),
    (0x2ADE, 0x22A6),
    (0x2AE3, 0x22A9),
    (0x2AE4, 0x22A8),
    (0x2AE5, 0x22AB),
    (0x2E02, 0x2E03),
    (0x2E03, 0x2E02),
    (0x2E04, 0x2E05),
    (0x2E05, 0x2E04),
    (0x2E09, 0x2E0A),
    (0x2E0A, 0x2E09),
    (0x2E0C, 0x2E0D),
    (0x2E0D, 0x2E0C),
    (0x2E1C, 0x2E1D),
    (0x2E1D, 0x2E1C),
    (0x2E20, 0x2E21),
    (0x2E21, 0x2E20),
    (0x2E22, 0x2E23),
    (0x2E23, 0x2E22),
    (0x2E24, 0x2E25),
    (0x2E25, 0x2E24),
    (0x2E26, 0x2E27),
    (0x2E27, 0x2E26),
    (0x2E28, 0x2E29),
    (0x2E29, 0x2E28),
    (0x2E55, 0x2E56),
    (0x2E56, 0x2E55),
    (0x2E57, 0x2E58),
    (0x2E58, 0x2E57),
    (0x2E59, 0x2E5A),
    (0x2E5A, 0x2E59),
    (0x2E5B, 0x2E5C),
    (0x2E5C, 0x2E5B),
    (0x3008, 0x3009),
    (0x3009, 0x3008),
    (0x300A, 0x300B),
    (0x300B, 0x300A),
    (0x300C, 0x300D),
    (0x300D, 0x300C),
    (0x300E, 0x300F),
    (0x300F, 0x300E),
    (0x3010, 0x3011),
    (0x3011, 0x3010),
    (0x3014, 0x3015),
    (0x3015, 0x3014),
    (0x3016, 0x3017),
    (0x3017, 0x3016),
    (0x3018, 0x3019),
    (0x3019, 0x3018),
    (0x301A, 0x301B),
    (0x301B, 0x301A),
    (0xFE59, 0xFE5A),
    (0xFE5A, 0xFE59),
    (0xFE5B, 0xFE5C),
    (0xFE5C, 0xFE5B),
    (0xFE5D, 0xFE5E),
    (0xFE5E, 0xFE5D),
    (0xFE64, 0xFE65),
    (0xFE65, 0xFE64),
    (0xFF08, 0xFF09),
    (0xFF09, 0xFF08),
    (0xFF1C, 0xFF1E),
    (0xFF1E, 0xFF1C),
    (0xFF3B, 0xFF3D),
    (0xFF3D, 0xFF3B),
    (0xFF5B, 0xFF5D),
    (0xFF5D, 0xFF5B),
    (0xFF5F, 0xFF60),
    (0xFF60, 0xFF5F),
    (0xFF62, 0xFF63),
    (0xFF63, 0xFF62),
];

