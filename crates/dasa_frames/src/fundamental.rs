//! Delaunay fundamental arguments of lunisolar theory.
//!
//! Source: IERS Conventions 2010, Table 5.2e (Simon et al. 1994).

/// The five Delaunay arguments at an epoch, degrees in [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayArguments {
    /// l: mean anomaly of the Moon.
    pub moon_anomaly: f64,
    /// l': mean anomaly of the Sun.
    pub sun_anomaly: f64,
    /// F: mean argument of latitude of the Moon.
    pub latitude_argument: f64,
    /// D: mean elongation of the Moon from the Sun.
    pub elongation: f64,
    /// Ω: mean longitude of the Moon's ascending node.
    pub node: f64,
}

impl DelaunayArguments {
    /// Mean longitude of the Moon, L = F + Ω.
    pub fn moon_mean_longitude(&self) -> f64 {
        (self.latitude_argument + self.node).rem_euclid(360.0)
    }
}

fn arcsec_poly_deg(t: f64, c: [f64; 5]) -> f64 {
    let arcsec = c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])));
    (arcsec / 3600.0).rem_euclid(360.0)
}

/// Delaunay arguments for `t` Julian centuries of TT since J2000.0.
pub fn delaunay_arguments(t: f64) -> DelaunayArguments {
    DelaunayArguments {
        moon_anomaly: arcsec_poly_deg(
            t,
            [485868.249036, 1717915923.2178, 31.8792, 0.051635, -0.00024470],
        ),
        sun_anomaly: arcsec_poly_deg(
            t,
            [1287104.79305, 129596581.0481, -0.5532, 0.000136, -0.00001149],
        ),
        latitude_argument: arcsec_poly_deg(
            t,
            [335779.526232, 1739527262.8478, -12.7512, -0.001037, 0.00000417],
        ),
        elongation: arcsec_poly_deg(
            t,
            [1072260.70369, 1602961601.2090, -6.3706, 0.006593, -0.00003169],
        ),
        node: arcsec_poly_deg(
            t,
            [450160.398036, -6962890.5431, 7.4722, 0.007702, -0.00005939],
        ),
    }
}
