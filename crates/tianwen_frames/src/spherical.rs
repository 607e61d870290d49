//! Rectangular ↔ spherical conversion for heliocentric and geocentric vectors.

use std::f64::consts::TAU;

use crate::coords::EclipticCoord;

/// Spherical position: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin in AU.
    pub distance_au: f64,
}

impl SphericalCoords {
    /// Direction only, as an ecliptic coordinate pair.
    pub fn ecliptic(&self) -> EclipticCoord {
        EclipticCoord::new(self.lon_deg, self.lat_deg)
    }
}

/// Convert rectangular `[x, y, z]` (AU) to spherical coordinates.
///
/// The zero vector maps to all-zero coordinates.
pub fn rectangular_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_au: 0.0,
        };
    }

    let lon = y.atan2(x).rem_euclid(TAU);
    let lat = f64::atan2(z, x.hypot(y));

    SphericalCoords {
        // rem_euclid can round up to exactly TAU for tiny negative angles.
        lon_deg: if lon >= TAU { 0.0 } else { lon.to_degrees() },
        lat_deg: lat.to_degrees(),
        distance_au: r,
    }
}

/// Convert spherical coordinates (degrees, AU) to rectangular `[x, y, z]`.
///
/// x = r·cos β·cos λ, y = r·cos β·sin λ, z = r·sin β
pub fn spherical_to_rectangular(s: &SphericalCoords) -> [f64; 3] {
    let (sl, cl) = s.lon_deg.to_radians().sin_cos();
    let (sb, cb) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance_au * cb * cl,
        s.distance_au * cb * sl,
        s.distance_au * sb,
    ]
}

/// Component-wise `a − b`.
pub fn vector_sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Component-wise `a + b`.
pub fn vector_add(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Euclidean length.
pub fn vector_norm(v: &[f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn along_x_axis() {
        let s = rectangular_to_spherical(&[1.0, 0.0, 0.0]);
        assert!(s.lon_deg.abs() < EPS);
        assert!(s.lat_deg.abs() < EPS);
        assert!((s.distance_au - 1.0).abs() < EPS);
    }

    #[test]
    fn along_y_axis() {
        let s = rectangular_to_spherical(&[0.0, 5.2, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < EPS);
    }

    #[test]
    fn along_negative_x() {
        let s = rectangular_to_spherical(&[-1.0, 0.0, 0.0]);
        assert!((s.lon_deg - 180.0).abs() < EPS);
    }

    #[test]
    fn along_z_axis() {
        let s = rectangular_to_spherical(&[0.0, 0.0, 2.0]);
        assert!((s.lat_deg - 90.0).abs() < EPS);
        assert!((s.distance_au - 2.0).abs() < EPS);
    }

    #[test]
    fn roundtrip() {
        let xyz = [1.234, -0.5678, 0.03456];
        let s = rectangular_to_spherical(&xyz);
        let back = spherical_to_rectangular(&s);
        for i in 0..3 {
            assert!(
                (xyz[i] - back[i]).abs() < EPS,
                "axis {i}: {:.12} != {:.12}",
                xyz[i],
                back[i]
            );
        }
    }

    #[test]
    fn zero_vector() {
        let s = rectangular_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance_au, 0.0);
        assert_eq!(s.lon_deg, 0.0);
    }

    #[test]
    fn longitude_in_open_range() {
        let s = rectangular_to_spherical(&[-1.0, -1.0, 0.0]);
        assert!((s.lon_deg - 225.0).abs() < EPS);
        let s = rectangular_to_spherical(&[1.0, -1e-300, 0.0]);
        assert!((0.0..360.0).contains(&s.lon_deg));
    }

    #[test]
    fn vector_helpers() {
        let a = [1.0, 2.0, 2.0];
        let b = [0.5, 0.5, 0.5];
        assert_eq!(vector_norm(&a), 3.0);
        assert_eq!(vector_add(&vector_sub(&a, &b), &b), a);
    }
}
