//! End-to-end blind-signature protocol tests:
//! blind → blind-sign → unblind → verify.
//!
//! One engine plays both client and server; the protocol only ever hands
//! the server the masked message.

use rlwe_sig::{BlindSignature, Poly, RlweSigner, SigParams};

fn engine() -> RlweSigner {
    let mut signer = RlweSigner::new(SigParams::toy()).unwrap();
    signer.generate_keys().unwrap();
    signer
}

#[test]
fn test_blind_round_trip() {
    let engine = engine();
    let secret = b"account:42";

    let ctx = engine.blind_message(secret).unwrap();
    let blind_sig = engine.blind_sign(ctx.blinded()).unwrap();
    let (_, server_pk) = engine.public_key();
    let final_sig = ctx.unblind(&blind_sig, &server_pk).unwrap();

    assert!(engine.verify_blinded(secret, &final_sig).unwrap());
}

#[test]
fn test_blind_round_trip_repeated_trials() {
    for trial in 0u8..25 {
        let engine = engine();
        let secret = [b's', trial];

        let ctx = engine.blind_message(&secret).unwrap();
        let blind_sig = engine.blind_sign(ctx.blinded()).unwrap();
        let (_, server_pk) = engine.public_key();
        let final_sig = ctx.unblind(&blind_sig, &server_pk).unwrap();

        assert!(
            engine.verify_blinded(&secret, &final_sig).unwrap(),
            "trial {} failed",
            trial
        );
    }
}

#[test]
fn test_wrong_secret_rejected() {
    let engine = engine();
    let secret = b"the real secret";

    let ctx = engine.blind_message(secret).unwrap();
    let blind_sig = engine.blind_sign(ctx.blinded()).unwrap();
    let (_, server_pk) = engine.public_key();
    let final_sig = ctx.unblind(&blind_sig, &server_pk).unwrap();

    for wrong in [&b"the real secreT"[..], b"another secret", b""] {
        assert!(
            !engine.verify_blinded(wrong, &final_sig).unwrap(),
            "secret {:?} accepted",
            wrong
        );
    }
}

#[test]
fn test_unblind_with_wrong_key_breaks_signature() {
    let server = engine();
    let other = engine();
    let secret = b"secret";

    let ctx = server.blind_message(secret).unwrap();
    let blind_sig = server.blind_sign(ctx.blinded()).unwrap();

    // Stripping the mask with an unrelated public key leaves the mask in
    // place, so verification fails.
    let (_, wrong_pk) = other.public_key();
    let final_sig = ctx.unblind(&blind_sig, &wrong_pk).unwrap();
    assert!(!server.verify_blinded(secret, &final_sig).unwrap());
}

#[test]
fn test_raw_blind_signature_does_not_verify() {
    // The server's output still carries the blinding contribution; only
    // the unblinded form verifies.
    let engine = engine();
    let secret = b"secret";

    let ctx = engine.blind_message(secret).unwrap();
    let blind_sig = engine.blind_sign(ctx.blinded()).unwrap();
    assert!(!engine.verify_blinded(secret, &blind_sig).unwrap());
}

#[test]
fn test_forged_blind_signature_rejected() {
    let engine = engine();
    let params = engine.params();
    let forged = BlindSignature(Poly::from_coeffs(vec![1234; params.ring_dim], params.q));
    assert!(!engine.verify_blinded(b"secret", &forged).unwrap());
}

#[test]
fn test_blind_round_trip_larger_ring() {
    let params = SigParams {
        ring_dim: 64,
        ..SigParams::toy()
    };
    let mut engine = RlweSigner::new(params).unwrap();
    engine.generate_keys().unwrap();

    let secret = b"larger ring secret";
    let ctx = engine.blind_message(secret).unwrap();
    let blind_sig = engine.blind_sign(ctx.blinded()).unwrap();
    let (_, server_pk) = engine.public_key();
    let final_sig = ctx.unblind(&blind_sig, &server_pk).unwrap();

    assert!(engine.verify_blinded(secret, &final_sig).unwrap());
    assert!(!engine.verify_blinded(b"some other secret", &final_sig).unwrap());
}
