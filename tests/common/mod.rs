#![allow(dead_code)]

use elf::tape::{Config, Modulator, CENTER};

/// Reads a sample stream back as a list of pulses, `true` for a 1.
pub fn pulses(samples: &[u8], config: &Config) -> Vec<bool> {
    let m = Modulator::new(config).unwrap();
    let zero_half = m.zero().len() / 2;
    let one_half = m.one().len() / 2;
    let mut pulses = vec![];
    let mut i = 0;
    while i < samples.len() {
        let low = samples[i..].iter().take_while(|s| **s < CENTER).count();
        assert!(low > 0, "pulse does not start low at sample {}", i);
        let high = samples[i + low..].iter().take_while(|s| **s > CENTER).count();
        assert_eq!(low, high, "uneven pulse at sample {}", i);
        if low == zero_half {
            pulses.push(false);
        } else if low == one_half {
            pulses.push(true);
        } else {
            panic!("pulse of {} samples at sample {}", low * 2, i);
        }
        i += low + high;
    }
    pulses
}

/// Bytes out of frames of ten pulses: start, data LSB first, parity.
pub fn bytes(frames: &[bool]) -> Vec<u8> {
    assert_eq!(frames.len() % 10, 0);
    frames
        .chunks(10)
        .map(|frame| {
            frame[1..9]
                .iter()
                .enumerate()
                .fold(0u8, |b, (i, bit)| if *bit { b | 1 << i } else { b })
        })
        .collect()
}
