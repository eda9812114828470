mod value_encoder_tests;
