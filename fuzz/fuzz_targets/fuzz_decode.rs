#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut decoder = fossave::SaveDecoder::new();
    decoder.max_decompressed_len(16 * 1024 * 1024);
    if let Ok(report) = decoder.decode(data) {
        let _ = report.to_string();
    }
});
