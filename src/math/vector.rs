use crate::math::ops::VectorOps;

/// Column vector backed by a contiguous `Vec<f64>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector {
    pub data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Vector {
        Vector { data }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Vector { data }
    }
}

impl VectorOps for Vector {
    fn zeros(len: usize) -> Self {
        Vector { data: vec![0.0; len] }
    }

    fn from_slice(values: &[f64]) -> Self {
        Vector { data: values.to_vec() }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Vector { data: self.data.iter().map(|&x| f(x)).collect() }
    }

    fn sub(&self, rhs: &Self) -> Self {
        assert_eq!(self.len(), rhs.len(), "Vectors are of incorrect sizes");
        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a - b).collect(),
        }
    }

    fn hadamard(&self, rhs: &Self) -> Self {
        assert_eq!(self.len(), rhs.len(), "Vectors are of incorrect sizes");
        Vector {
            data: self.data.iter().zip(&rhs.data).map(|(a, b)| a * b).collect(),
        }
    }

    fn add_assign(&mut self, rhs: &Self) {
        assert_eq!(self.len(), rhs.len(), "Vectors are of incorrect sizes");
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a += b;
        }
    }

    fn scaled_sub_assign(&mut self, k: f64, rhs: &Self) {
        assert_eq!(self.len(), rhs.len(), "Vectors are of incorrect sizes");
        for (a, b) in self.data.iter_mut().zip(&rhs.data) {
            *a -= k * b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hadamard_multiplies_element_wise() {
        let a = Vector::new(vec![1.0, 2.0, 3.0]);
        let b = Vector::new(vec![4.0, 5.0, 6.0]);
        assert_eq!(a.hadamard(&b).data, vec![4.0, 10.0, 18.0]);
    }

    #[test]
    fn scaled_sub_assign_applies_step() {
        let mut a = Vector::new(vec![1.0, 1.0]);
        a.scaled_sub_assign(0.5, &Vector::new(vec![2.0, -2.0]));
        assert_eq!(a.data, vec![0.0, 2.0]);
    }

    #[test]
    #[should_panic]
    fn sub_rejects_mismatched_lengths() {
        let _ = Vector::zeros(2).sub(&Vector::zeros(3));
    }
}
