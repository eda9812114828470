mod field_selection_builder_tests;
