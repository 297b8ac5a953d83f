use std::io::Write;

/// Text for the `LIST`/`INFO` chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct Tags {
    pub artist: String,
    pub album: String,
    pub title: String,
    /// `ICRD`, usually `YYYY-MM-DD`.
    pub created: Option<String>,
}

impl Tags {
    /// Every field set to `name`, dated today.
    pub fn new(name: &str) -> Tags {
        Tags {
            artist: name.to_string(),
            album: name.to_string(),
            title: name.to_string(),
            created: Some(chrono::Local::now().format("%Y-%m-%d").to_string()),
        }
    }

    fn fields(&self) -> Vec<(&'static [u8; 4], &str)> {
        let mut fields = vec![
            (b"IART", self.artist.as_str()),
            (b"IPRD", self.album.as_str()),
            (b"INAM", self.title.as_str()),
        ];
        if let Some(created) = &self.created {
            fields.push((b"ICRD", created.as_str()));
        }
        fields
    }

    /// Chunk body: `INFO` then one NUL terminated, even padded
    /// sub-chunk per field.
    fn info(&self) -> Vec<u8> {
        let mut body = b"INFO".to_vec();
        for (id, text) in self.fields() {
            let size = text.len() + 1;
            body.extend_from_slice(id);
            body.extend_from_slice(&(size as u32).to_le_bytes());
            body.extend_from_slice(text.as_bytes());
            body.push(0);
            if size % 2 == 1 {
                body.push(0);
            }
        }
        body
    }
}

fn padded(len: usize) -> usize {
    len + len % 2
}

/// Mono 8 bit unsigned PCM.
pub fn write_wav<W: Write>(
    w: &mut W,
    frame_rate: u32,
    samples: &[u8],
    tags: Option<&Tags>,
) -> std::io::Result<()> {
    let info = tags.map(|t| t.info());
    let mut riff_len = 4 + (8 + 16) + (8 + padded(samples.len()));
    if let Some(info) = &info {
        riff_len += 8 + padded(info.len());
    }
    if riff_len > u32::max_value() as usize {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "recording too long for a WAV file",
        ));
    }

    w.write_all(b"RIFF")?;
    w.write_all(&(riff_len as u32).to_le_bytes())?;
    w.write_all(b"WAVE")?;

    w.write_all(b"fmt ")?;
    w.write_all(&16u32.to_le_bytes())?;
    w.write_all(&1u16.to_le_bytes())?; // PCM
    w.write_all(&1u16.to_le_bytes())?; // channels
    w.write_all(&frame_rate.to_le_bytes())?;
    w.write_all(&frame_rate.to_le_bytes())?; // byte rate
    w.write_all(&1u16.to_le_bytes())?; // block align
    w.write_all(&8u16.to_le_bytes())?;

    w.write_all(b"data")?;
    w.write_all(&(samples.len() as u32).to_le_bytes())?;
    w.write_all(samples)?;
    if samples.len() % 2 == 1 {
        w.write_all(&[0])?;
    }

    if let Some(info) = info {
        w.write_all(b"LIST")?;
        w.write_all(&(info.len() as u32).to_le_bytes())?;
        w.write_all(&info)?;
        if info.len() % 2 == 1 {
            w.write_all(&[0])?;
        }
    }
    Ok(())
}
