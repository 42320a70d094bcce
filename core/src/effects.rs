use crate::constants::BLAST_FRAMES;
use crate::types::Blast;

/// Advance a blast by one frame. It burns out once every frame has shown.
pub fn advance_blast(b: &mut Blast) {
    b.frame += 1;
    if b.frame >= BLAST_FRAMES {
        b.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tint;

    #[test]
    fn burns_out_after_exactly_five_frames() {
        let mut b = Blast { x: 500.0, y: 400.0, frame: 0, tint: Tint::Magenta, active: true };

        for expected in 1..BLAST_FRAMES {
            advance_blast(&mut b);
            assert!(b.active);
            assert_eq!(b.frame, expected);
        }

        advance_blast(&mut b);
        assert!(!b.active);
        assert_eq!(b.frame, BLAST_FRAMES);
    }
}
