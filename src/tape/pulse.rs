use super::CENTER;

/// One full square wave cycle, low half first.
#[derive(Debug, Clone, PartialEq)]
pub struct Pulse {
    samples: Vec<u8>,
}

impl Pulse {
    pub fn square(frequency: u32, frame_rate: u32, amplitude: u8) -> Pulse {
        let half = (frame_rate / frequency / 2) as usize;
        let low = CENTER - amplitude / 2;
        let high = CENTER + amplitude / 2;
        let mut samples = vec![low; half];
        samples.resize(half * 2, high);
        Pulse { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}
