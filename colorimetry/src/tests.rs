//! Reference values of the models for a selection of colors.
//!
//! The values of `*50` are relative to D50 without chromatic adaptation, the others to D65. See
//! <http://www.brucelindbloom.com/index.html?ColorCalcHelp.html>.
use crate::{Color, Gray16, Gray8, Nrgba16, Nrgba8, Rgba8, Whitepoint};

/// One step of 8-bit depth.
const DELTA: f64 = 1.0 / 256.0;

/// Check that the relative error is below `eps`, values near zero are not compared.
fn almost_eq_eps(v1: f64, v2: f64, eps: f64) -> bool {
    if v1.abs() > DELTA {
        ((v1 - v2) / v1).abs() < eps
    } else {
        true
    }
}

#[track_caller]
fn assert_almost_eq(what: &str, color: Color, value: [f64; 3], expected: [f64; 3]) {
    let close = value
        .iter()
        .zip(expected)
        .all(|(&v, e)| almost_eq_eps(v, e, DELTA));
    assert!(close, "{color:?}.{what} = {value:?}, expected {expected:?}");
}

#[track_caller]
fn assert_creates(what: &str, created: Color, expected: Color) {
    assert!(
        created.almost_eq_rgb(expected),
        "{what} created {created:?}, expected {expected:?}"
    );
}

struct Reference {
    color: Color,
    hsl: [f64; 3],
    hsv: [f64; 3],
    hex: &'static str,
    xyz: [f64; 3],
    xyy: [f64; 3],
    lab: [f64; 3],
    lab50: [f64; 3],
    luv: [f64; 3],
    luv50: [f64; 3],
    hcl: [f64; 3],
    hcl50: [f64; 3],
    rgba: [u16; 4],
    rgb255: [u8; 3],
}

const REFERENCE: &[Reference] = &[
    Reference {
        color: Color::new(1.0, 1.0, 1.0),
        hsl: [0.0, 0.0, 1.00],
        hsv: [0.0, 0.0, 1.0],
        hex: "#ffffff",
        xyz: [0.950470, 1.000000, 1.088830],
        xyy: [0.312727, 0.329023, 1.000000],
        lab: [1.000000, -0.000004, -0.000067],
        lab50: [1.000000, -0.018661, -0.151341],
        luv: [1.00000, 0.00000, 0.00000],
        luv50: [1.00000, -0.14716, -0.25658],
        hcl: [0.000000, 0.000067, 1.000000],
        hcl50: [262.970824, 0.152487, 1.000000],
        rgba: [65535, 65535, 65535, 65535],
        rgb255: [255, 255, 255],
    },
    Reference {
        color: Color::new(0.5, 1.0, 1.0),
        hsl: [180.0, 1.0, 0.75],
        hsv: [180.0, 0.5, 1.0],
        hex: "#80ffff",
        xyz: [0.626296, 0.832848, 1.073634],
        xyy: [0.247276, 0.328828, 0.832848],
        lab: [0.931395, -0.276009, -0.085174],
        lab50: [0.931395, -0.292244, -0.235741],
        luv: [0.93139, -0.53909, -0.11630],
        luv50: [0.93139, -0.67615, -0.35528],
        hcl: [197.149836, 0.288852, 0.931395],
        hcl50: [218.891684, 0.375474, 0.931395],
        rgba: [32768, 65535, 65535, 65535],
        rgb255: [128, 255, 255],
    },
    Reference {
        color: Color::new(1.0, 0.5, 1.0),
        hsl: [300.0, 1.0, 0.75],
        hsv: [300.0, 0.5, 1.0],
        hex: "#ff80ff",
        xyz: [0.669430, 0.437920, 0.995150],
        xyy: [0.318397, 0.208285, 0.437920],
        lab: [0.720889, 0.509121, -0.329867],
        lab50: [0.720889, 0.492522, -0.476672],
        luv: [0.72089, 0.60047, -0.77626],
        luv50: [0.72089, 0.49438, -0.96123],
        hcl: [327.060255, 0.606644, 0.720889],
        hcl50: [315.936917, 0.685415, 0.720889],
        rgba: [65535, 32768, 65535, 65535],
        rgb255: [255, 128, 255],
    },
    Reference {
        color: Color::new(1.0, 1.0, 0.5),
        hsl: [60.0, 1.0, 0.75],
        hsv: [60.0, 0.5, 1.0],
        hex: "#ffff80",
        xyz: [0.808654, 0.943273, 0.341930],
        xyy: [0.386203, 0.450496, 0.943273],
        lab: [0.977634, -0.129552, 0.470291],
        lab50: [0.977634, -0.147230, 0.367469],
        luv: [0.97764, 0.05759, 0.79816],
        luv50: [0.97764, -0.08628, 0.54731],
        hcl: [105.401396, 0.487808, 0.977634],
        hcl50: [111.834030, 0.395867, 0.977634],
        rgba: [65535, 65535, 32768, 65535],
        rgb255: [255, 255, 128],
    },
    Reference {
        color: Color::new(0.5, 0.5, 1.0),
        hsl: [240.0, 1.0, 0.75],
        hsv: [240.0, 0.5, 1.0],
        hex: "#8080ff",
        xyz: [0.345256, 0.270768, 0.979954],
        xyy: [0.216329, 0.169656, 0.270768],
        lab: [0.590461, 0.260064, -0.497795],
        lab50: [0.590461, 0.246752, -0.643849],
        luv: [0.59045, -0.07568, -1.04877],
        luv50: [0.59045, -0.16257, -1.20027],
        hcl: [297.584033, 0.561634, 0.590461],
        hcl50: [290.969081, 0.689513, 0.590461],
        rgba: [32768, 32768, 65535, 65535],
        rgb255: [128, 128, 255],
    },
    Reference {
        color: Color::new(1.0, 0.5, 0.5),
        hsl: [0.0, 1.0, 0.75],
        hsv: [0.0, 0.5, 1.0],
        hex: "#ff8080",
        xyz: [0.527613, 0.381193, 0.248250],
        xyy: [0.455996, 0.329451, 0.381193],
        lab: [0.681075, 0.378015, 0.178332],
        lab50: [0.681075, 0.362682, 0.085917],
        luv: [0.68108, 0.92148, 0.19879],
        luv50: [0.68106, 0.82106, 0.02393],
        hcl: [25.255982, 0.417968, 0.681075],
        hcl50: [13.327381, 0.372719, 0.681075],
        rgba: [65535, 32768, 32768, 65535],
        rgb255: [255, 128, 128],
    },
    Reference {
        color: Color::new(0.5, 1.0, 0.5),
        hsl: [120.0, 1.0, 0.75],
        hsv: [120.0, 0.5, 1.0],
        hex: "#80ff80",
        xyz: [0.484480, 0.776121, 0.326734],
        xyy: [0.305216, 0.488946, 0.776121],
        lab: [0.906028, -0.469433, 0.389809],
        lab50: [0.906028, -0.484336, 0.288533],
        luv: [0.90603, -0.58869, 0.76102],
        luv50: [0.90603, -0.72202, 0.52855],
        hcl: [140.294351, 0.610179, 0.906028],
        hcl50: [149.216497, 0.563767, 0.906028],
        rgba: [32768, 65535, 32768, 65535],
        rgb255: [128, 255, 128],
    },
    Reference {
        color: Color::new(0.5, 0.5, 0.5),
        hsl: [0.0, 0.0, 0.50],
        hsv: [0.0, 0.0, 0.5],
        hex: "#808080",
        xyz: [0.203440, 0.214041, 0.233054],
        xyy: [0.312727, 0.329023, 0.214041],
        lab: [0.533890, -0.000002, -0.000040],
        lab50: [0.533890, -0.011162, -0.090529],
        luv: [0.53389, 0.00000, 0.00000],
        luv50: [0.53389, -0.07857, -0.13699],
        hcl: [0.000000, 0.000040, 0.533890],
        hcl50: [262.970824, 0.091215, 0.533890],
        rgba: [32768, 32768, 32768, 65535],
        rgb255: [128, 128, 128],
    },
    Reference {
        color: Color::new(0.0, 1.0, 1.0),
        hsl: [180.0, 1.0, 0.50],
        hsv: [180.0, 1.0, 1.0],
        hex: "#00ffff",
        xyz: [0.538014, 0.787327, 1.069496],
        xyy: [0.224656, 0.328760, 0.787327],
        lab: [0.911140, -0.375650, -0.110458],
        lab50: [0.911140, -0.391084, -0.260831],
        luv: [0.91113, -0.70477, -0.15204],
        luv50: [0.91113, -0.83886, -0.38582],
        hcl: [196.385720, 0.391553, 0.911140],
        hcl50: [213.701127, 0.470084, 0.911140],
        rgba: [0, 65535, 65535, 65535],
        rgb255: [0, 255, 255],
    },
    Reference {
        color: Color::new(1.0, 0.0, 1.0),
        hsl: [300.0, 1.0, 0.50],
        hsv: [300.0, 1.0, 1.0],
        hex: "#ff00ff",
        xyz: [0.592894, 0.284848, 0.969638],
        xyy: [0.320938, 0.154190, 0.284848],
        lab: [0.603236, 0.767463, -0.475274],
        lab50: [0.603236, 0.751522, -0.620814],
        luv: [0.60324, 0.84071, -1.08683],
        luv50: [0.60324, 0.75194, -1.24161],
        hcl: [328.230959, 0.902710, 0.603236],
        hcl50: [320.440744, 0.974780, 0.603236],
        rgba: [65535, 0, 65535, 65535],
        rgb255: [255, 0, 255],
    },
    Reference {
        color: Color::new(1.0, 1.0, 0.0),
        hsl: [60.0, 1.0, 0.50],
        hsv: [60.0, 1.0, 1.0],
        hex: "#ffff00",
        xyz: [0.770033, 0.927825, 0.138526],
        xyy: [0.419320, 0.505246, 0.927825],
        lab: [0.971388, -0.168420, 0.738104],
        lab50: [0.971388, -0.185812, 0.662024],
        luv: [0.97139, 0.07706, 1.06787],
        luv50: [0.97139, -0.06590, 0.81862],
        hcl: [102.853641, 0.757075, 0.971388],
        hcl50: [105.677996, 0.687606, 0.971388],
        rgba: [65535, 65535, 0, 65535],
        rgb255: [255, 255, 0],
    },
    Reference {
        color: Color::new(0.0, 0.0, 1.0),
        hsl: [240.0, 1.0, 0.50],
        hsv: [240.0, 1.0, 1.0],
        hex: "#0000ff",
        xyz: [0.180437, 0.072175, 0.950304],
        xyy: [0.150000, 0.060000, 0.072175],
        lab: [0.322994, 0.618683, -0.842699],
        lab50: [0.322994, 0.607960, -0.987265],
        luv: [0.32297, -0.09405, -1.30342],
        luv50: [0.32297, -0.14158, -1.38629],
        hcl: [306.284932, 1.045423, 0.322994],
        hcl50: [301.624825, 1.159443, 0.322994],
        rgba: [0, 0, 65535, 65535],
        rgb255: [0, 0, 255],
    },
    Reference {
        color: Color::new(0.0, 1.0, 0.0),
        hsl: [120.0, 1.0, 0.50],
        hsv: [120.0, 1.0, 1.0],
        hex: "#00ff00",
        xyz: [0.357576, 0.715152, 0.119192],
        xyy: [0.300000, 0.600000, 0.715152],
        lab: [0.877350, -0.673304, 0.649840],
        lab50: [0.877350, -0.686773, 0.577478],
        luv: [0.87735, -0.83078, 1.07398],
        luv50: [0.87735, -0.95989, 0.84887],
        hcl: [136.015956, 0.935751, 0.877350],
        hcl50: [139.940931, 0.897295, 0.877350],
        rgba: [0, 65535, 0, 65535],
        rgb255: [0, 255, 0],
    },
    Reference {
        color: Color::new(1.0, 0.0, 0.0),
        hsl: [0.0, 1.0, 0.50],
        hsv: [0.0, 1.0, 1.0],
        hex: "#ff0000",
        xyz: [0.412456, 0.212673, 0.019334],
        xyy: [0.640000, 0.330000, 0.212673],
        lab: [0.532390, 0.625707, 0.525011],
        lab50: [0.532390, 0.611582, 0.485548],
        luv: [0.53241, 1.75015, 0.37756],
        luv50: [0.53241, 1.67180, 0.24096],
        hcl: [39.998956, 0.816790, 0.532390],
        hcl50: [38.446811, 0.780890, 0.532390],
        rgba: [65535, 0, 0, 65535],
        rgb255: [255, 0, 0],
    },
    Reference {
        color: Color::new(0.0, 0.0, 0.0),
        hsl: [0.0, 0.0, 0.00],
        hsv: [0.0, 0.0, 0.0],
        hex: "#000000",
        xyz: [0.000000, 0.000000, 0.000000],
        xyy: [0.312727, 0.329023, 0.000000],
        lab: [0.000000, 0.000000, 0.000000],
        lab50: [0.000000, 0.000000, 0.000000],
        luv: [0.00000, 0.00000, 0.00000],
        luv50: [0.00000, 0.00000, 0.00000],
        hcl: [0.000000, 0.000000, 0.000000],
        hcl50: [0.000000, 0.000000, 0.000000],
        rgba: [0, 0, 0, 65535],
        rgb255: [0, 0, 0],
    },
];

/// Colors that have a short hex notation.
const SHORT_HEX: &[(Color, &str)] = &[
    (Color::new(1.0, 1.0, 1.0), "#fff"),
    (Color::new(0.6, 1.0, 1.0), "#9ff"),
    (Color::new(1.0, 0.6, 1.0), "#f9f"),
    (Color::new(1.0, 1.0, 0.6), "#ff9"),
    (Color::new(0.6, 0.6, 1.0), "#99f"),
    (Color::new(1.0, 0.6, 0.6), "#f99"),
    (Color::new(0.6, 1.0, 0.6), "#9f9"),
    (Color::new(0.6, 0.6, 0.6), "#999"),
    (Color::new(0.0, 1.0, 1.0), "#0ff"),
    (Color::new(1.0, 0.0, 1.0), "#f0f"),
    (Color::new(1.0, 1.0, 0.0), "#ff0"),
    (Color::new(0.0, 0.0, 1.0), "#00f"),
    (Color::new(0.0, 1.0, 0.0), "#0f0"),
    (Color::new(1.0, 0.0, 0.0), "#f00"),
    (Color::new(0.0, 0.0, 0.0), "#000"),
];

#[test]
fn channels() {
    for r in REFERENCE {
        assert_eq!(r.color.to_rgba16(), r.rgba, "{:?}", r.color);
        assert_eq!(r.color.to_rgb8(), r.rgb255, "{:?}", r.color);
        assert_eq!(Color::from_rgb8(r.rgb255).to_rgb8(), r.rgb255);
    }
}

#[test]
fn hsv() {
    for r in REFERENCE {
        let [h, s, v] = r.hsv;
        assert_creates("hsv", Color::from_hsv(h, s, v), r.color);
        assert_almost_eq("to_hsv()", r.color, r.color.to_hsv(), r.hsv);
    }
}

#[test]
fn hsl() {
    for r in REFERENCE {
        let [h, s, l] = r.hsl;
        assert_creates("hsl", Color::from_hsl(h, s, l), r.color);
        assert_almost_eq("to_hsl()", r.color, r.color.to_hsl(), r.hsl);
    }
}

#[test]
fn hex() {
    for r in REFERENCE {
        let lower = Color::from_hex(r.hex).expect("valid hex");
        assert_creates(r.hex, lower, r.color);
        let upper = Color::from_hex(&r.hex.to_uppercase()).expect("valid hex");
        assert_creates(r.hex, upper, r.color);
        assert_eq!(r.color.to_hex(), r.hex);
    }

    for &(color, hex) in SHORT_HEX {
        assert_creates(hex, Color::from_hex(hex).expect("valid hex"), color);
        let upper = hex.to_uppercase();
        assert_creates(hex, Color::from_hex(&upper).expect("valid hex"), color);
    }
}

#[test]
fn xyz() {
    for r in REFERENCE {
        let [x, y, z] = r.xyz;
        assert_creates("xyz", Color::from_xyz(x, y, z), r.color);
        assert_almost_eq("to_xyz()", r.color, r.color.to_xyz(), r.xyz);
    }
}

#[test]
fn xyy() {
    for r in REFERENCE {
        let [x, y, luminance] = r.xyy;
        assert_creates("xyy", Color::from_xyy(x, y, luminance), r.color);
        assert_almost_eq("to_xyy()", r.color, r.color.to_xyy(), r.xyy);
    }
}

#[test]
fn lab() {
    for r in REFERENCE {
        let [l, a, b] = r.lab;
        assert_creates("lab", Color::from_lab(l, a, b), r.color);
        assert_almost_eq("to_lab()", r.color, r.color.to_lab(), r.lab);

        let [l, a, b] = r.lab50;
        let created = Color::from_lab_white_ref(l, a, b, Whitepoint::D50);
        assert_creates("lab50", created, r.color);
        let value = r.color.to_lab_white_ref(Whitepoint::D50);
        assert_almost_eq("to_lab_white_ref(D50)", r.color, value, r.lab50);
    }
}

#[test]
fn luv() {
    for r in REFERENCE {
        let [l, u, v] = r.luv;
        assert_creates("luv", Color::from_luv(l, u, v), r.color);
        assert_almost_eq("to_luv()", r.color, r.color.to_luv(), r.luv);

        let [l, u, v] = r.luv50;
        let created = Color::from_luv_white_ref(l, u, v, Whitepoint::D50);
        assert_creates("luv50", created, r.color);
        let value = r.color.to_luv_white_ref(Whitepoint::D50);
        assert_almost_eq("to_luv_white_ref(D50)", r.color, value, r.luv50);
    }
}

#[test]
fn hcl() {
    for r in REFERENCE {
        let [h, c, l] = r.hcl;
        assert_creates("hcl", Color::from_hcl(h, c, l), r.color);
        assert_almost_eq("to_hcl()", r.color, r.color.to_hcl(), r.hcl);

        let [h, c, l] = r.hcl50;
        let created = Color::from_hcl_white_ref(h, c, l, Whitepoint::D50);
        assert_creates("hcl50", created, r.color);
        let value = r.color.to_hcl_white_ref(Whitepoint::D50);
        assert_almost_eq("to_hcl_white_ref(D50)", r.color, value, r.hcl50);
    }
}

#[test]
fn luv_lch() {
    for r in REFERENCE {
        let [l, c, h] = r.color.to_luv_lch();
        assert_creates("luv_lch", Color::from_luv_lch(l, c, h), r.color);

        let [luv_l, u, v] = r.color.to_luv();
        assert!((l - r.luv[0]).abs() < 1e-4, "{:?}", r.color);
        assert!((l - luv_l).abs() < 1e-12, "{:?}", r.color);
        assert!((c - u.hypot(v)).abs() < 1e-12, "{:?}", r.color);
    }
}

#[test]
fn neutral_hue_is_zero() {
    let grays = (1..=10).map(|i| f64::from(i) / 10.0);
    for gray in grays.map(|v| Color::new(v, v, v)) {
        assert_eq!(gray.to_hcl()[0], 0.0, "{gray:?}");
        assert_eq!(gray.to_luv_lch()[2], 0.0, "{gray:?}");
    }

    let [hue, chroma, lightness] = Color::WHITE.to_hcl();
    assert_eq!(hue, 0.0);
    assert!(chroma < 1e-3 && (lightness - 1.0).abs() < 1e-6);
}

#[test]
fn black_is_degenerate() {
    let black = Color::BLACK;
    assert_eq!(black.to_hsl(), [0.0; 3]);
    assert_eq!(black.to_hsv(), [0.0; 3]);
    assert_eq!(black.to_lab(), [0.0; 3]);
    assert_eq!(black.to_luv(), [0.0; 3]);
    assert_eq!(black.to_hcl(), [0.0; 3]);
    assert_eq!(black.to_luv_lch(), [0.0; 3]);

    let [x, y, luminance] = black.to_xyy_white_ref(Whitepoint::D50);
    let [wx, wy, wz] = Whitepoint::D50.to_xyz();
    assert!((x - wx / (wx + wy + wz)).abs() < 1e-12);
    assert!((y - wy / (wx + wy + wz)).abs() < 1e-12);
    assert_eq!(luminance, 0.0);
}

/// Pairs with their CIE76, CIE94 and CIEDE2000 differences. See
/// <http://www.brucelindbloom.com/index.html?ColorDifferenceCalcHelp.html>.
const DISTANCES: &[([f64; 3], [f64; 3], f64, f64, f64)] = &[
    ([1.0, 1.0, 1.0], [1.0, 1.0, 1.0], 0.0, 0.0, 0.0),
    ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 0.0, 0.0, 0.0),
];

/// Same as above, but the colors are given by their Lab coordinates.
#[rustfmt::skip]
const LAB_DISTANCES: &[([f64; 3], [f64; 3], f64, f64, f64)] = &[
    ([1.000000, 0.000000, 0.000000], [0.931390, -0.353319, -0.108946], 47.82075103713838, 47.82075103713826, 24.95839826021627),
    ([0.720892, 0.651673, -0.422133], [0.977637, -0.165795, 0.602017], 169.6842805730313, 71.73241839963067, 85.19582299499467),
    ([0.590453, 0.332846, -0.637099], [0.681085, 0.483884, 0.228328], 112.81367663807802, 47.30269333036521, 41.38821174674354),
    ([0.906026, -0.600870, 0.498993], [0.533890, 0.000000, 0.000000], 106.6758044178174, 41.41738433437593, 41.690253231681176),
    ([0.911132, -0.480875, -0.141312], [0.603242, 0.982343, -0.608249], 198.99353255481768, 98.12426621634205, 63.89635218932751),
    ([0.971393, -0.215537, 0.944780], [0.322970, 0.791875, -1.078602], 296.49556584164037, 119.21658629889, 110.6721165119005),
    ([0.877347, -0.861827, 0.831793], [0.532408, 0.800925, 0.672032], 216.57695311092084, 73.21043676199285, 96.18944220977916),
];

#[test]
fn distances() {
    let rgb = DISTANCES
        .iter()
        .map(|&(c1, c2, d76, d94, d00)| (Color::from(c1), Color::from(c2), d76, d94, d00));
    let lab = LAB_DISTANCES.iter().map(|&(c1, c2, d76, d94, d00)| {
        let [l1, a1, b1] = c1;
        let [l2, a2, b2] = c2;
        (Color::from_lab(l1, a1, b1), Color::from_lab(l2, a2, b2), d76, d94, d00)
    });

    for (c1, c2, d76, d94, d00) in rgb.chain(lab) {
        let d = c1.distance_cie76(c2);
        assert!(almost_eq_eps(d, d76, DELTA), "{c1:?} {c2:?}: cie76 {d} != {d76}");
        let d = c1.distance_cie94(c2);
        assert!(almost_eq_eps(d, d94, DELTA), "{c1:?} {c2:?}: cie94 {d} != {d94}");
        let d = c1.distance_ciede2000(c2);
        assert!(almost_eq_eps(d, d00, DELTA), "{c1:?} {c2:?}: ciede2000 {d} != {d00}");
    }
}

#[test]
fn clamped() {
    let color = Color::new(1.1, -0.1, 0.5);
    assert_eq!(color.clamped(), Color::new(1.0, 0.0, 0.5));
}

#[test]
fn from_pixels() {
    let (color, ok) = Color::from_pixel(&Nrgba8 {
        r: 123,
        g: 45,
        b: 67,
        a: 255,
    });
    assert!(ok);
    assert_eq!(color.to_rgb8(), [123, 45, 67]);

    let (color, ok) = Color::from_pixel(&Nrgba16 {
        r: 123 << 8,
        g: 45 << 8,
        b: 67 << 8,
        a: 0xffff,
    });
    assert!(ok);
    assert_eq!(color.to_rgb8(), [123, 45, 67]);

    let (color, ok) = Color::from_pixel(&Gray8(123));
    assert!(ok);
    assert_eq!(color.to_rgb8(), [123, 123, 123]);

    let (color, ok) = Color::from_pixel(&Gray16(123 << 8));
    assert!(ok);
    assert_eq!(color.to_rgb8(), [123, 123, 123]);

    let (color, ok) = Color::from_pixel(&Rgba8 {
        r: 255,
        g: 255,
        b: 255,
        a: 0,
    });
    assert!(!ok);
    assert_eq!(color.to_rgb8(), [0, 0, 0]);
}
