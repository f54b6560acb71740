//! End-to-end direct-scheme tests: keygen → sign → verify.

use rlwe_sig::{Poly, RlweSigner, Signature, SigParams};

fn signer() -> RlweSigner {
    let mut signer = RlweSigner::new(SigParams::toy()).unwrap();
    signer.generate_keys().unwrap();
    signer
}

#[test]
fn test_round_trip() {
    let signer = signer();
    let message = [0x12, 0x34];

    let signature = signer.sign(&message).unwrap();
    assert!(signer.verify(&message, &signature).unwrap());
}

#[test]
fn test_round_trip_repeated_trials() {
    // Fresh keys and fresh randomness every trial; the noise bound makes
    // a failure here astronomically unlikely.
    for trial in 0..25 {
        let signer = signer();
        let message = [trial as u8, 0xa5];
        let signature = signer.sign(&message).unwrap();
        assert!(
            signer.verify(&message, &signature).unwrap(),
            "trial {} failed",
            trial
        );
    }
}

#[test]
fn test_round_trip_various_messages() {
    let signer = signer();
    for message in [&[0x01u8, 0x00][..], &[0xff, 0xff], &[0x12, 0x34], &[0x80]] {
        let signature = signer.sign(message).unwrap();
        assert!(signer.verify(message, &signature).unwrap());
    }
}

#[test]
fn test_tampered_message_rejected() {
    let signer = signer();
    let message = [0x12, 0x34];
    let signature = signer.sign(&message).unwrap();

    // Single-bit flips inside the 16 encoded bits.
    for tampered in [[0x13, 0x34], [0x12, 0x35], [0x92, 0x34], [0x12, 0xb4]] {
        assert!(
            !signer.verify(&tampered, &signature).unwrap(),
            "tampered message {:02x?} accepted",
            tampered
        );
    }
}

#[test]
fn test_zero_signature_rejected() {
    let signer = signer();
    let params = signer.params();
    let forged = Signature {
        u: Poly::zero(params.ring_dim, params.q),
        v: Poly::zero(params.ring_dim, params.q),
    };
    // Any message with a set bit inside the coefficient window defeats the
    // all-zero forgery.
    assert!(!signer.verify(&[0xff, 0x00], &forged).unwrap());
    assert!(!signer.verify(&[0x12, 0x34], &forged).unwrap());
}

#[test]
fn test_constant_signature_rejected() {
    let signer = signer();
    let params = signer.params();
    let constant = Poly::from_coeffs(vec![7; params.ring_dim], params.q);
    let forged = Signature {
        u: constant.clone(),
        v: constant,
    };
    assert!(!signer.verify(&[0x12, 0x34], &forged).unwrap());
}

#[test]
fn test_signature_bound_to_keys() {
    // A signature from one signer must not verify under another's keys;
    // verification involves the secret key, so fresh keys reject it.
    let alice = signer();
    let mallory = signer();
    let message = [0x12, 0x34];
    let signature = alice.sign(&message).unwrap();
    assert!(alice.verify(&message, &signature).unwrap());
    assert!(!mallory.verify(&message, &signature).unwrap());
}

#[test]
fn test_larger_ring() {
    let params = SigParams {
        ring_dim: 64,
        ..SigParams::toy()
    };
    let mut signer = RlweSigner::new(params).unwrap();
    signer.generate_keys().unwrap();

    let message = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04];
    let signature = signer.sign(&message).unwrap();
    assert!(signer.verify(&message, &signature).unwrap());
    assert!(!signer.verify(&[0xde, 0xad, 0xbe, 0xee, 0x01, 0x02, 0x03, 0x04], &signature).unwrap());
}
