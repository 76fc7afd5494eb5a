use bitlib::{BitsetError, bitset};
use tracing_subscriber::EnvFilter;

// Rejected preconditions emit debug events; with a subscriber installed the error path must
// behave exactly as without one.
#[test]
fn rejections_with_subscriber_installed() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("bitlib=debug"))
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let mut bits = bitset![1, 0, 1];
        assert_eq!(
            bits.xor(&bitset![1]),
            Err(BitsetError::LengthMismatch { left: 3, right: 1 })
        );
        assert!(bits.rotate_left(9).is_err());
        assert!(bits.at(3).is_err());
        assert!("0x".parse::<bitlib::Bitset>().is_err());
        assert_eq!(bits, bitset![1, 0, 1]);
    });
}
