#![no_main]
use bmpcanvas::{decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode, and the double round trip must
    // reproduce the image exactly.
    let Ok(first) = decode(data) else { return };

    let bytes1 = encode(&first).expect("decoded image failed to encode");
    let blob_len = first.header().len();
    assert_eq!(
        &bytes1[..blob_len],
        &data[..blob_len],
        "header blob not passed through"
    );

    let second = decode(&bytes1).expect("re-encoded image failed to decode");
    let bytes2 = encode(&second).expect("second encode failed");
    let third = decode(&bytes2).expect("second re-decode failed");

    // A single encode flips bottom-up images; applied twice it is the
    // identity.
    assert_eq!(third, first, "double round trip is not the identity");
    assert_eq!(encode(&third).expect("third encode failed"), bytes1);
});
