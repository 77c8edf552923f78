use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use lockstep_math::{FixedMat2, FixedScalar, FixedVec2, FixedVec3};

fn fx(value: i32) -> FixedScalar {
    FixedScalar::from_int(value)
}

fn dec(text: &str) -> FixedScalar {
    FixedScalar::parse(text).unwrap()
}

fn v3(x: i32, y: i32, z: i32) -> FixedVec3 {
    FixedVec3::from_ints(x, y, z)
}

// ============================================================================
// FixedVec2
// ============================================================================

#[test]
fn test_vec2_length_and_normalize() {
    let v = FixedVec2::from_ints(3, 4);
    assert_eq!(v.length(), fx(5));
    assert_eq!(v.length_squared(), fx(25));
    assert_eq!(v.normalize(), FixedVec2::new(fx(3) / fx(5), fx(4) / fx(5)));
    assert_eq!(FixedVec2::ZERO.normalize(), FixedVec2::ZERO);
    assert_eq!(FixedVec2::ZERO.length(), FixedScalar::ZERO);
}

#[test]
fn test_vec2_products() {
    let a = FixedVec2::from_ints(2, 3);
    let b = FixedVec2::from_ints(-1, 4);
    assert_eq!(a.dot(b), fx(10));
    assert_eq!(a.cross(b), fx(11));
    assert_eq!(a.perp(), FixedVec2::from_ints(-3, 2));
    assert_eq!(a * b, FixedVec2::from_ints(-2, 12));
    assert_eq!(FixedScalar::TWO * a, FixedVec2::from_ints(4, 6));
    assert_eq!(a / FixedScalar::TWO, FixedVec2::new(FixedScalar::ONE, dec("1.5")));
}

#[test]
fn test_vec2_rotation_quarter_turn_is_exact() {
    let rotated = FixedVec2::RIGHT.rotate(FixedScalar::PI_HALF);
    assert_eq!(rotated, FixedVec2::UP);

    let matrix = FixedMat2::rotate(FixedScalar::PI_HALF);
    assert_eq!(matrix.mul_vec2(FixedVec2::RIGHT), FixedVec2::UP);
    assert_eq!(FixedVec2::RIGHT.rotate(FixedScalar::PI), FixedVec2::LEFT);
}

#[test]
fn test_vec2_rotation_eighth_turn() {
    let rotated = FixedVec2::from_ints(2, 0).rotate(FixedScalar::PI_QUARTER);
    let expected = std::f64::consts::SQRT_2;
    assert!((rotated.x.to_f64() - expected).abs() < 1e-3);
    assert!((rotated.y.to_f64() - expected).abs() < 1e-3);
}

#[test]
fn test_vec2_angles() {
    assert_eq!(FixedVec2::UP.angle(), FixedScalar::PI_HALF);
    assert_eq!(FixedVec2::RIGHT.signed_angle(FixedVec2::UP), FixedScalar::PI_HALF);
    assert_eq!(FixedVec2::UP.signed_angle(FixedVec2::RIGHT), -FixedScalar::PI_HALF);

    let degrees = FixedVec2::RIGHT.angle_between(FixedVec2::ONE);
    assert!((degrees.to_f64() - 45.0).abs() < 0.01, "{degrees}");
    assert_eq!(FixedVec2::RIGHT.radians_between(FixedVec2::ZERO), FixedScalar::ZERO);
}

#[test]
fn test_vec2_clamp_and_move() {
    let v = FixedVec2::from_ints(3, 4);
    assert_eq!(v.clamp_length(fx(10)), v);
    assert_eq!(v.clamp_length(FixedScalar::ONE), v.normalize());

    let start = FixedVec2::ZERO;
    let target = FixedVec2::from_ints(8, 0);
    assert_eq!(start.move_towards(target, fx(2)), FixedVec2::from_ints(2, 0));
    assert_eq!(start.move_towards(target, fx(50)), target);

    let target = FixedVec2::from_ints(6, 8);
    assert_eq!(start.distance(target), fx(10));
    assert_eq!(start.distance_squared(target), fx(100));
}

#[test]
fn test_vec2_project_reflect() {
    let v = FixedVec2::from_ints(3, 4);
    assert_eq!(v.project(FixedVec2::from_ints(2, 0)), FixedVec2::from_ints(3, 0));
    assert_eq!(v.reflect(FixedVec2::UP), FixedVec2::from_ints(3, -4));
}

#[test]
fn test_vec2_lerp_min_max() {
    let a = FixedVec2::from_ints(-2, 6);
    let b = FixedVec2::from_ints(4, 0);
    assert_eq!(a.lerp(b, FixedScalar::HALF), FixedVec2::from_ints(1, 3));
    assert_eq!(a.lerp(b, fx(3)), b);
    assert_eq!(a.min(b), FixedVec2::from_ints(-2, 0));
    assert_eq!(a.max(b), FixedVec2::from_ints(4, 6));
    assert_eq!(a.abs(), FixedVec2::from_ints(2, 6));
    assert_eq!((-a).to_ints(), (2, -6));
}

#[test]
fn test_vec2_display() {
    assert_eq!(FixedVec2::new(dec("1.5"), dec("-0.25")).to_string(), "(1.5000, -0.2500)");
}

#[test]
fn test_vec2_encoding_matches_raw_contract() {
    let v = FixedVec2::new(dec("-3.125"), dec("1000.5"));
    assert_eq!(FixedVec2::from_le_bytes(v.to_le_bytes()), v);

    let bytes = bincode::serialize(&v).unwrap();
    assert_eq!(bytes, v.to_le_bytes().to_vec());

    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, format!("{{\"x\":{},\"y\":{}}}", v.x.raw(), v.y.raw()));
    let back: FixedVec2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_vec2_float_boundary() {
    let v = FixedVec2::from_vec2_unsafe(bevy::math::Vec2::new(1.5, -2.0));
    assert_eq!(v, FixedVec2::new(dec("1.5"), fx(-2)));
    assert_eq!(v.to_vec2(), bevy::math::Vec2::new(1.5, -2.0));
}

// ============================================================================
// FixedVec3
// ============================================================================

#[test]
fn test_vec3_normalize_and_magnitude() {
    let v = v3(5, 0, 0);
    assert_eq!(v.normalize(), FixedVec3::RIGHT);
    assert_eq!(v.length(), fx(5));
    assert_eq!(v.length_squared(), fx(5) * fx(5));
}

#[test]
fn test_vec3_clamp_length() {
    let clamped = v3(5, 0, 0).clamp_length(FixedScalar::ONE + FixedScalar::TENTH);
    assert!((clamped.x.to_f64() - 1.1).abs() < 0.01);
    assert_eq!(clamped.y, FixedScalar::ZERO);
    assert_eq!(clamped.z, FixedScalar::ZERO);
}

#[test]
fn test_vec3_dot() {
    assert_eq!(v3(5, 0, 0).dot(v3(5, 0, 0)), fx(25));
    assert_eq!(v3(1, 5, 4).dot(v3(2, 0, 1)), fx(6));

    let a = FixedVec3::new(FixedScalar::TENTH, FixedScalar::THREE_QUARTERS, FixedScalar::TENTH);
    let b = FixedVec3::new(FixedScalar::HALF + FixedScalar::TENTH, FixedScalar::FIFTH, dec("0.33"));
    assert!((a.dot(b).to_f64() - 0.243).abs() < 0.01);
}

#[test]
fn test_vec3_angles() {
    assert_eq!(v3(1, 5, 4).angle_between(v3(2, 0, 1)).to_int(), 65);
    assert_eq!(v3(2, 1, 1).angle_between(v3(2, 0, 1)).to_int(), 24);

    assert_eq!(v3(1, 5, 4).radians_between(v3(2, 0, 1)).to_int(), 1);
    let radians = v3(2, 1, 1).radians_between(v3(2, 0, 1));
    assert!((radians.to_f64() - 0.42).abs() < 0.01);
}

#[test]
fn test_angles_between_long_vectors() {
    let right = FixedVec2::from_ints(4000, 0);
    let radians = right.radians_between(FixedVec2::from_ints(0, 4000));
    assert!((radians.to_f64() - FRAC_PI_2).abs() < 1e-3, "{radians}");
    let radians = right.radians_between(FixedVec2::from_ints(3000, 3000));
    assert!((radians.to_f64() - FRAC_PI_4).abs() < 1e-3, "{radians}");
    let degrees = right.angle_between(FixedVec2::from_ints(-4000, 0));
    assert!((degrees.to_f64() - 180.0).abs() < 0.01, "{degrees}");

    let radians = v3(4000, 0, 0).radians_between(v3(0, 0, 4000));
    assert!((radians.to_f64() - FRAC_PI_2).abs() < 1e-3, "{radians}");
    let radians = v3(5000, 0, 0).radians_between(v3(5000, 5000, 0));
    assert!((radians.to_f64() - FRAC_PI_4).abs() < 1e-3, "{radians}");
}

#[test]
fn test_vec3_signed_angle() {
    let angle = v3(1, 5, 4).signed_angle(v3(2, 0, 1), FixedVec3::UP);
    assert_eq!(angle.to_int(), 65);

    let angle = v3(-2, 1, 1).signed_angle(v3(2, 1, 1), FixedVec3::UP);
    assert!((angle.to_f64() - 109.47).abs() < 0.1);

    let angle = v3(2, 1, 1).signed_angle(v3(-2, 1, 1), FixedVec3::UP);
    assert!((angle.to_f64() + 109.47).abs() < 0.1);
}

#[test]
fn test_vec3_cross() {
    assert_eq!(v3(1, 5, 4).cross(v3(2, 0, 1)), v3(5, 7, -10));
    assert_eq!(FixedVec3::RIGHT.cross(FixedVec3::UP), FixedVec3::FORWARD);
}

#[test]
fn test_vec3_reflect_and_project() {
    let normal = v3(-1, 0, 0);
    assert_eq!(v3(5, 0, 5).reflect(normal), v3(-5, 0, 5));
    assert_eq!(v3(5, 0, 5).project(normal), v3(5, 0, 0));
    assert_eq!(v3(5, 1, 5).project_on_plane(normal), v3(0, 1, 5));
}

#[test]
fn test_vec3_lerp_and_move() {
    let lerped = v3(5, 0, 5).lerp(FixedVec3::ZERO, FixedScalar::HALF);
    assert_eq!(lerped, FixedVec3::new(dec("2.5"), FixedScalar::ZERO, dec("2.5")));

    let target = v3(5, 1, 1);
    assert_eq!(FixedVec3::ONE.move_towards(target, FixedScalar::ONE), v3(2, 1, 1));
    assert_eq!(FixedVec3::ONE.move_towards(target, fx(10)), target);
}

#[test]
fn test_vec3_float_boundary() {
    let v = FixedVec3::from_vec3_unsafe(bevy::math::Vec3::new(0.5, -1.0, 2.0));
    assert_eq!(v, FixedVec3::new(FixedScalar::HALF, FixedScalar::MINUS_ONE, FixedScalar::TWO));
    assert_eq!(v.to_vec3(), bevy::math::Vec3::new(0.5, -1.0, 2.0));
    assert_eq!(v.to_string(), "(0.5000, -1.0000, 2.0000)");
}

// ============================================================================
// FixedMat2
// ============================================================================

#[test]
fn test_mat2_identity_and_scale() {
    let v = FixedVec2::from_ints(3, -7);
    assert_eq!(FixedMat2::IDENTITY.mul_vec2(v), v);
    assert_eq!(FixedMat2::scale(FixedScalar::TWO).mul_vec2(v), FixedVec2::from_ints(6, -14));
    assert_eq!(
        FixedMat2::scale_vec(FixedVec2::from_ints(2, 3)),
        FixedMat2::scale_xy(FixedScalar::TWO, FixedScalar::THREE)
    );
}

#[test]
fn test_mat2_layout() {
    let m = FixedMat2::new(fx(1), fx(2), fx(3), fx(4));
    assert_eq!(m.c0, FixedVec2::from_ints(1, 2));
    assert_eq!(m.c1, FixedVec2::from_ints(3, 4));
    assert_eq!(m.transpose(), FixedMat2::new(fx(1), fx(3), fx(2), fx(4)));
    assert_eq!(m.determinant(), fx(-2));
    assert_eq!(m.mul_vec2(FixedVec2::from_ints(1, 1)), FixedVec2::from_ints(3, 7));
}

#[test]
fn test_mat2_product_composes_transforms() {
    let scale = FixedMat2::scale_xy(FixedScalar::TWO, FixedScalar::THREE);
    let rotate = FixedMat2::rotate(FixedScalar::PI_HALF);
    let v = FixedVec2::ONE;

    let composed = scale.mul_mat(rotate);
    assert_eq!(composed.mul_vec2(v), rotate.mul_vec2(scale.mul_vec2(v)));
    assert_eq!(composed.mul_vec2(v), FixedVec2::from_ints(-3, 2));
    assert_eq!(FixedMat2::IDENTITY.mul_mat(rotate), rotate);
}

#[test]
fn test_mat2_rotation_determinant() {
    let det = FixedMat2::rotate(FixedScalar::PI_QUARTER).determinant();
    assert!((det.to_f64() - 1.0).abs() < 1e-3);
}

#[test]
fn test_mat2_arithmetic() {
    let m = FixedMat2::new(fx(1), fx(2), fx(3), fx(4));
    assert_eq!(m + m, m * FixedScalar::TWO);
    assert_eq!(m - m, FixedMat2::ZERO);
    assert_eq!(-m, m * FixedScalar::MINUS_ONE);
    assert_eq!((m * FixedScalar::TWO) / FixedScalar::TWO, m);
    assert_eq!(m.mul_elementwise(FixedMat2::ONE), m);
    assert_eq!(m.div_elementwise(m), FixedMat2::ONE);
}

#[test]
fn test_mat2_serde() {
    let m = FixedMat2::rotate(FixedScalar::ONE);
    let json = serde_json::to_string(&m).unwrap();
    let back: FixedMat2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);
}
