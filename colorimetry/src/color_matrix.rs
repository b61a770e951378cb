//! Bare minimum linear algebra. Inversion is only needed to verify the fixed matrices.

/// A column major matrix.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ColMatrix(pub(crate) [[f64; 3]; 3]);

/// A row major matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RowMatrix(pub(crate) [f64; 9]);

#[cfg(test)]
#[rustfmt::skip]
impl ColMatrix {
    pub(crate) fn adj(self) -> RowMatrix {
        let m = self.0;

        let det = |c1: usize, c2: usize, r1: usize, r2: usize| {
            m[c1][r1] * m[c2][r2] - m[c2][r1] * m[c1][r2]
        };

        RowMatrix([
            det(1, 2, 1, 2), -det(1, 2, 0, 2), det(1, 2, 0, 1),
            -det(0, 2, 1, 2), det(0, 2, 0, 2), -det(0, 2, 0, 1),
            det(0, 1, 1, 2), -det(0, 1, 0, 2), det(0, 1, 0, 1),
        ])
    }

    pub(crate) fn det(self) -> f64 {
        let det2 = |ma: f64, mb: f64, na: f64, nb: f64| {
            ma * nb - na * mb
        };
        let [x, y, z] = self.0;
        x[0] * det2(y[1], y[2], z[1], z[2])
            - x[1] * det2(y[0], y[2], z[0], z[2])
            + x[2] * det2(y[0], y[1], z[0], z[1])
    }

    pub(crate) fn inv(self) -> RowMatrix {
        let RowMatrix(adj) = self.adj();
        let det_n = self.det();

        RowMatrix(adj.map(|a| a / det_n))
    }
}

#[rustfmt::skip]
impl RowMatrix {
    pub(crate) const fn new(rows: [f64; 9]) -> RowMatrix {
        RowMatrix(rows)
    }

    /// Calculate self · vec
    pub(crate) fn mul_vec(&self, vec: [f64; 3]) -> [f64; 3] {
        let x = &self.0[0..3];
        let y = &self.0[3..6];
        let z = &self.0[6..9];

        let dot = |r: &[f64], c: [f64; 3]| {
            r[0] * c[0] + r[1] * c[1] + r[2] * c[2]
        };

        [dot(x, vec), dot(y, vec), dot(z, vec)]
    }
}

#[cfg(test)]
#[rustfmt::skip]
impl RowMatrix {
    /// A matrix whose columns are the given vectors, each scaled by the matching weight.
    pub(crate) fn with_weighted_columns(cols: [[f64; 3]; 3], weights: [f64; 3]) -> Self {
        let [c0, c1, c2] = cols;
        let [w0, w1, w2] = weights;

        RowMatrix([
            w0*c0[0], w1*c1[0], w2*c2[0],
            w0*c0[1], w1*c1[1], w2*c2[1],
            w0*c0[2], w1*c1[2], w2*c2[2],
        ])
    }

    pub(crate) fn inv(self) -> RowMatrix {
        self.to_col().inv()
    }

    pub(crate) fn det(self) -> f64 {
        self.to_col().det()
    }

    pub(crate) const fn into_inner(self) -> [f64; 9] {
        self.0
    }

    pub(crate) const fn to_col(self) -> ColMatrix {
        let RowMatrix(r) = self;

        ColMatrix([
            [r[0], r[3], r[6]],
            [r[1], r[4], r[7]],
            [r[2], r[5], r[8]],
        ])
    }
}

#[test]
fn matrix_ops() {
    #[rustfmt::skip]
    let mat = RowMatrix::new([
        2.0, 0.0, 0.0,
        0.0, 4.0, 0.0,
        1.0, 0.0, 0.5,
    ]);

    assert_eq!(mat.to_col().0, [[2.0, 0.0, 1.0], [0.0, 4.0, 0.0], [0.0, 0.0, 0.5]]);
    assert_eq!(mat.det(), 4.0);
    assert_eq!(mat.mul_vec([1.0, 1.0, 2.0]), [2.0, 4.0, 2.0]);

    let inv = mat.inv();
    let [x, y, z] = inv.mul_vec(mat.mul_vec([1.0, 2.0, 3.0]));
    assert!((x - 1.0).abs() < 1e-12);
    assert!((y - 2.0).abs() < 1e-12);
    assert!((z - 3.0).abs() < 1e-12);
}
