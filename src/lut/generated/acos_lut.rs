// @generated by `lut_gen`. Do not edit by hand.
// Regenerate with `cargo run --bin lut_gen` and diff against the committed file.

#[rustfmt::skip]
pub static ACOS_LUT: [i32; 514] = [
    205887, 200093, 197690, 195844, 194287, 192914, 191671, 190526, 189460, 188458,
    187509, 186606, 185742, 184912, 184113, 183342, 182595, 181870, 181165, 180479,
    179810, 179157, 178519, 177895, 177283, 176683, 176095, 175517, 174949, 174391,
    173842, 173301, 172768, 172243, 171725, 171215, 170711, 170213, 169722, 169237,
    168757, 168283, 167814, 167350, 166891, 166436, 165987, 165541, 165100, 164663,
    164230, 163800, 163375, 162953, 162534, 162119, 161708, 161299, 160894, 160491,
    160092, 159695, 159302, 158911, 158522, 158137, 157753, 157373, 156994, 156618,
    156245, 155873, 155504, 155137, 154772, 154409, 154048, 153689, 153331, 152976,
    152623, 152271, 151921, 151573, 151227, 150882, 150539, 150197, 149857, 149518,
    149181, 148846, 148512, 148179, 147848, 147518, 147189, 146862, 146536, 146211,
    145888, 145565, 145244, 144924, 144606, 144288, 143972, 143656, 143342, 143029,
    142717, 142405, 142095, 141786, 141478, 141171, 140865, 140559, 140255, 139951,
    139649, 139347, 139046, 138746, 138447, 138149, 137851, 137554, 137258, 136963,
    136669, 136375, 136082, 135790, 135498, 135207, 134917, 134628, 134339, 134051,
    133763, 133476, 133190, 132904, 132619, 132335, 132051, 131768, 131485, 131203,
    130922, 130641, 130360, 130081, 129801, 129522, 129244, 128966, 128689, 128412,
    128136, 127860, 127584, 127309, 127035, 126761, 126487, 126214, 125941, 125668,
    125396, 125125, 124854, 124583, 124312, 124042, 123773, 123503, 123234, 122966,
    122697, 122430, 122162, 121895, 121628, 121361, 121095, 120829, 120563, 120298,
    120033, 119768, 119503, 119239, 118975, 118711, 118448, 118185, 117922, 117659,
    117397, 117134, 116872, 116611, 116349, 116088, 115827, 115566, 115305, 115044,
    114784, 114524, 114264, 114004, 113745, 113485, 113226, 112967, 112708, 112449,
    112190, 111932, 111674, 111415, 111157, 110899, 110641, 110384, 110126, 109869,
    109611, 109354, 109097, 108840, 108583, 108326, 108069, 107812, 107556, 107299,
    107042, 106786, 106529, 106273, 106017, 105761, 105504, 105248, 104992, 104736,
    104480, 104224, 103968, 103712, 103456, 103200, 102944, 102688, 102432, 102176,
    101920, 101664, 101408, 101151, 100895, 100639, 100383, 100127, 99871, 99614,
    99358, 99102, 98845, 98589, 98332, 98075, 97818, 97562, 97305, 97048,
    96791, 96533, 96276, 96019, 95761, 95504, 95246, 94988, 94730, 94472,
    94214, 93956, 93697, 93438, 93180, 92921, 92662, 92402, 92143, 91883,
    91623, 91364, 91103, 90843, 90583, 90322, 90061, 89800, 89538, 89277,
    89015, 88753, 88491, 88228, 87966, 87703, 87439, 87176, 86912, 86648,
    86384, 86120, 85855, 85590, 85324, 85059, 84793, 84526, 84260, 83993,
    83725, 83458, 83190, 82922, 82653, 82384, 82115, 81845, 81575, 81305,
    81034, 80763, 80491, 80219, 79947, 79674, 79401, 79127, 78853, 78578,
    78303, 78028, 77752, 77475, 77199, 76921, 76643, 76365, 76086, 75807,
    75527, 75247, 74966, 74684, 74402, 74119, 73836, 73552, 73268, 72983,
    72697, 72411, 72124, 71837, 71549, 71260, 70970, 70680, 70389, 70098,
    69806, 69513, 69219, 68924, 68629, 68333, 68036, 67739, 67440, 67141,
    66841, 66540, 66239, 65936, 65633, 65328, 65023, 64717, 64409, 64101,
    63792, 63482, 63171, 62859, 62545, 62231, 61916, 61599, 61282, 60963,
    60643, 60322, 60000, 59676, 59352, 59026, 58698, 58370, 58040, 57708,
    57376, 57042, 56706, 56369, 56031, 55690, 55349, 55006, 54661, 54314,
    53966, 53616, 53265, 52911, 52556, 52199, 51840, 51479, 51116, 50751,
    50384, 50014, 49643, 49269, 48893, 48515, 48134, 47751, 47365, 46977,
    46586, 46192, 45796, 45396, 44994, 44588, 44180, 43768, 43353, 42935,
    42513, 42087, 41658, 41225, 40788, 40346, 39901, 39451, 38997, 38538,
    38074, 37605, 37130, 36651, 36165, 35674, 35176, 34673, 34162, 33644,
    33119, 32587, 32046, 31496, 30938, 30370, 29793, 29204, 28604, 27993,
    27368, 26730, 26077, 25408, 24722, 24018, 23293, 22546, 21774, 20975,
    20145, 19281, 18378, 17429, 16427, 15361, 14217, 12974, 11600, 10043,
    8197, 0, 0, 0
];
