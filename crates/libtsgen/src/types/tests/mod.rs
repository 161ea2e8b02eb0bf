mod type_expr_tests;
