//! Temporal prediction between consecutive planar frames.
//!
//! Frame 0 is the keyframe and is stored as is. Every later frame is stored
//! as its byte-wise difference from the previous frame, modulo 256.

use crate::error::{CodecError, Result};

fn ensure_same_length(previous: &[u8], current: &[u8]) -> Result<()> {
    if previous.len() != current.len() {
        return Err(CodecError::LengthMismatch {
            previous: previous.len(),
            current: current.len(),
        });
    }

    Ok(())
}

pub fn predict(previous: &[u8], current: &[u8]) -> Result<Vec<u8>> {
    ensure_same_length(previous, current)?;

    Ok(current
        .iter()
        .zip(previous)
        .map(|(cur, prev)| cur.wrapping_sub(*prev))
        .collect())
}

pub fn unpredict(delta: &[u8], previous: &[u8]) -> Result<Vec<u8>> {
    ensure_same_length(previous, delta)?;

    Ok(delta
        .iter()
        .zip(previous)
        .map(|(d, prev)| d.wrapping_add(*prev))
        .collect())
}

pub fn predict_frames<F: AsRef<[u8]>>(frames: &[F]) -> Result<Vec<Vec<u8>>> {
    let Some(keyframe) = frames.first() else {
        return Ok(Vec::new());
    };

    let mut deltas = Vec::with_capacity(frames.len());
    deltas.push(keyframe.as_ref().to_vec());

    for pair in frames.windows(2) {
        deltas.push(predict(pair[0].as_ref(), pair[1].as_ref())?);
    }

    Ok(deltas)
}

/// Undoes [`predict_frames`]. Each frame is rebuilt from the previously
/// decoded one, so this runs strictly in sequence order.
pub fn reconstruct_frames(deltas: Vec<Vec<u8>>) -> Result<Vec<Vec<u8>>> {
    let mut frames = Vec::with_capacity(deltas.len());
    let mut deltas = deltas.into_iter();

    let Some(keyframe) = deltas.next() else {
        return Ok(frames);
    };

    let last = deltas.try_fold(keyframe, |previous, delta| {
        let current = unpredict(&delta, &previous)?;
        frames.push(previous);

        Ok::<_, CodecError>(current)
    })?;
    frames.push(last);

    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_wraps_around() {
        assert_eq!(predict(&[10, 0, 255], &[5, 255, 0]).unwrap(), vec![251, 255, 1]);
    }

    #[test]
    fn test_unpredict_wraps_around() {
        assert_eq!(unpredict(&[251, 255, 1], &[10, 0, 255]).unwrap(), vec![5, 255, 0]);
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            predict(&[1, 2], &[1]),
            Err(CodecError::LengthMismatch {
                previous: 2,
                current: 1
            })
        ));
    }

    #[test]
    fn test_keyframe_is_copied() {
        let frames = vec![vec![9, 8, 7], vec![9, 8, 7]];
        let deltas = predict_frames(&frames).unwrap();

        assert_eq!(deltas[0], vec![9, 8, 7]);
        assert_eq!(deltas[1], vec![0, 0, 0]);
    }

    #[test]
    fn test_reconstruct_uses_previous_decoded_frame() {
        let deltas = vec![vec![100, 200], vec![1, 100], vec![255, 0]];
        let frames = reconstruct_frames(deltas).unwrap();

        assert_eq!(frames, vec![vec![100, 200], vec![101, 44], vec![100, 44]]);
    }

    #[test]
    fn test_keyframe_does_not_depend_on_later_frames() {
        let a = reconstruct_frames(vec![vec![3, 4], vec![0, 0]]).unwrap();
        let b = reconstruct_frames(vec![vec![3, 4], vec![77, 12]]).unwrap();

        assert_eq!(a[0], b[0]);
    }

    #[test]
    fn test_empty_sequence() {
        let frames: Vec<Vec<u8>> = Vec::new();

        assert!(predict_frames(&frames).unwrap().is_empty());
        assert!(reconstruct_frames(Vec::new()).unwrap().is_empty());
    }
}
