use super::*;

/// A sampled room impulse response.
///
/// Sample `n` holds the summed gains of every path whose delay quantizes
/// to time `n / sample_rate` seconds. Once built, the buffer is immutable
/// except for the explicit [`Self::normalize`] step.
#[derive(Clone, Debug, PartialEq)]
pub struct Rir {
    samples: Vec<Float>,
    sample_rate: u32,
}

impl Rir {
    #[inline]
    #[must_use]
    pub fn samples(&self) -> &[Float] {
        &self.samples
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Time of sample `index` in milliseconds:
    /// `(index / sample_rate) * 1000`. Consumers drawing a time axis must
    /// use exactly this formula.
    #[inline]
    #[must_use]
    pub fn time_ms(&self, index: usize) -> Float {
        (index as Float / Float::from(self.sample_rate)) * 1000.0
    }

    /// Scale the buffer so the peak absolute sample is exactly 1,
    /// preserving every ratio between samples. Does nothing to an
    /// all-zero response.
    pub fn normalize(&mut self) {
        let peak = self
            .samples
            .iter()
            .fold(0.0 as Float, |peak, s| peak.max(s.abs()));

        if peak > 0.0 {
            for sample in &mut self.samples {
                *sample /= peak;
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn into_samples(self) -> Vec<Float> {
        self.samples
    }
}

/// Quantize `paths` onto a fixed sample grid.
///
/// The buffer length is `round(length_sec * sample_rate)`. Each path adds
/// its gain at `round(delay * sample_rate)`; paths quantizing to the same
/// index sum, and paths quantizing outside the buffer are silently
/// dropped, since a finite response is an intentional truncation of the
/// tail rather than an error. A zero sample rate or a non-positive length
/// is rejected before any work happens.
pub fn build_rir(paths: &[Path], sample_rate: u32, length_sec: Float) -> Result<Rir, ConfigError> {
    if sample_rate == 0 {
        return Err(ConfigError::ZeroSampleRate);
    }
    if !(length_sec.is_finite() && length_sec > 0.0) {
        return Err(ConfigError::InvalidLength(length_sec));
    }

    let rate = Float::from(sample_rate);
    let num_samples = (length_sec * rate).round() as usize;
    let mut samples = vec![0.0; num_samples];

    for path in paths {
        // bounds-checked on the signed value: `as usize` would clamp a
        // negative index onto sample 0 instead of dropping the path
        let index = (path.delay * rate).round();
        if (0.0..samples.len() as Float).contains(&index) {
            samples[index as usize] += path.gain;
        }
    }

    Ok(Rir {
        samples,
        sample_rate,
    })
}
