// @generated by `lut_gen`. Do not edit by hand.
// Regenerate with `cargo run --bin lut_gen` and diff against the committed file.

#[rustfmt::skip]
pub static ASIN_LUT: [i32; 514] = [
    -102944, -97149, -94746, -92901, -91343, -89970, -88727, -87583, -86517, -85515,
    -84566, -83662, -82798, -81969, -81170, -80398, -79651, -78926, -78221, -77535,
    -76867, -76214, -75575, -74951, -74339, -73740, -73151, -72573, -72006, -71447,
    -70898, -70357, -69824, -69299, -68782, -68271, -67767, -67270, -66778, -66293,
    -65813, -65339, -64870, -64406, -63947, -63493, -63043, -62597, -62156, -61719,
    -61286, -60857, -60431, -60009, -59591, -59176, -58764, -58355, -57950, -57548,
    -57148, -56752, -56358, -55967, -55579, -55193, -54810, -54429, -54051, -53675,
    -53301, -52929, -52560, -52193, -51828, -51465, -51104, -50745, -50388, -50032,
    -49679, -49327, -48977, -48629, -48283, -47938, -47595, -47253, -46913, -46575,
    -46238, -45902, -45568, -45235, -44904, -44574, -44245, -43918, -43592, -43267,
    -42944, -42622, -42301, -41981, -41662, -41344, -41028, -40713, -40398, -40085,
    -39773, -39462, -39152, -38842, -38534, -38227, -37921, -37616, -37311, -37008,
    -36705, -36403, -36102, -35802, -35503, -35205, -34907, -34611, -34315, -34019,
    -33725, -33431, -33138, -32846, -32554, -32264, -31973, -31684, -31395, -31107,
    -30819, -30533, -30246, -29961, -29676, -29391, -29108, -28824, -28542, -28260,
    -27978, -27697, -27417, -27137, -26857, -26579, -26300, -26022, -25745, -25468,
    -25192, -24916, -24640, -24365, -24091, -23817, -23543, -23270, -22997, -22725,
    -22453, -22181, -21910, -21639, -21369, -21099, -20829, -20560, -20291, -20022,
    -19754, -19486, -19218, -18951, -18684, -18417, -18151, -17885, -17619, -17354,
    -17089, -16824, -16560, -16295, -16031, -15768, -15504, -15241, -14978, -14715,
    -14453, -14191, -13929, -13667, -13405, -13144, -12883, -12622, -12361, -12101,
    -11840, -11580, -11320, -11060, -10801, -10541, -10282, -10023, -9764, -9505,
    -9247, -8988, -8730, -8472, -8213, -7956, -7698, -7440, -7182, -6925,
    -6667, -6410, -6153, -5896, -5639, -5382, -5125, -4868, -4612, -4355,
    -4099, -3842, -3586, -3329, -3073, -2817, -2561, -2304, -2048, -1792,
    -1536, -1280, -1024, -768, -512, -256, 0, 256, 512, 768,
    1024, 1280, 1536, 1792, 2048, 2304, 2561, 2817, 3073, 3329,
    3586, 3842, 4099, 4355, 4612, 4868, 5125, 5382, 5639, 5896,
    6153, 6410, 6667, 6925, 7182, 7440, 7698, 7956, 8213, 8472,
    8730, 8988, 9247, 9505, 9764, 10023, 10282, 10541, 10801, 11060,
    11320, 11580, 11840, 12101, 12361, 12622, 12883, 13144, 13405, 13667,
    13929, 14191, 14453, 14715, 14978, 15241, 15504, 15768, 16031, 16295,
    16560, 16824, 17089, 17354, 17619, 17885, 18151, 18417, 18684, 18951,
    19218, 19486, 19754, 20022, 20291, 20560, 20829, 21099, 21369, 21639,
    21910, 22181, 22453, 22725, 22997, 23270, 23543, 23817, 24091, 24365,
    24640, 24916, 25192, 25468, 25745, 26022, 26300, 26579, 26857, 27137,
    27417, 27697, 27978, 28260, 28542, 28824, 29108, 29391, 29676, 29961,
    30246, 30533, 30819, 31107, 31395, 31684, 31973, 32264, 32554, 32846,
    33138, 33431, 33725, 34019, 34315, 34611, 34907, 35205, 35503, 35802,
    36102, 36403, 36705, 37008, 37311, 37616, 37921, 38227, 38534, 38842,
    39152, 39462, 39773, 40085, 40398, 40713, 41028, 41344, 41662, 41981,
    42301, 42622, 42944, 43267, 43592, 43918, 44245, 44574, 44904, 45235,
    45568, 45902, 46238, 46575, 46913, 47253, 47595, 47938, 48283, 48629,
    48977, 49327, 49679, 50032, 50388, 50745, 51104, 51465, 51828, 52193,
    52560, 52929, 53301, 53675, 54051, 54429, 54810, 55193, 55579, 55967,
    56358, 56752, 57148, 57548, 57950, 58355, 58764, 59176, 59591, 60009,
    60431, 60857, 61286, 61719, 62156, 62597, 63043, 63493, 63947, 64406,
    64870, 65339, 65813, 66293, 66778, 67270, 67767, 68271, 68782, 69299,
    69824, 70357, 70898, 71447, 72006, 72573, 73151, 73740, 74339, 74951,
    75575, 76214, 76867, 77535, 78221, 78926, 79651, 80398, 81170, 81969,
    82798, 83662, 84566, 85515, 86517, 87583, 88727, 89970, 91343, 92901,
    94746, 102944, 102944, 102944
];
