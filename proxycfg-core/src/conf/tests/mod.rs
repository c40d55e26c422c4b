mod codec_tests;
mod loader_tests;
mod roundtrip_tests;
mod validation_tests;
mod variant_tests;
