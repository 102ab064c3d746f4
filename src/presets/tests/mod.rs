mod selection_tests;
