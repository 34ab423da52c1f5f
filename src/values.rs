use ndarray::Array1;

#[derive(Debug, Clone)]
pub struct ActionValues {
    q: Array1<f64>,
    n: Array1<u64>,
}

impl ActionValues {
    pub fn new(n_actions: usize) -> Self {
        Self {
            q: Array1::zeros(n_actions),
            n: Array1::zeros(n_actions),
        }
    }

    pub fn n_actions(&self) -> usize {
        self.q.len()
    }

    pub fn q(&self) -> &Array1<f64> {
        &self.q
    }

    pub fn visits(&self) -> &Array1<u64> {
        &self.n
    }

    /// Incremental sample mean: after k updates of `action`, `q[action]` is
    /// the mean of the k rewards and `n[action]` is k.
    pub fn update(&mut self, action: usize, reward: f64) {
        self.n[action] += 1;
        self.q[action] += (reward - self.q[action]) / self.n[action] as f64;
    }

    pub fn into_parts(self) -> (Array1<f64>, Array1<u64>) {
        (self.q, self.n)
    }
}
