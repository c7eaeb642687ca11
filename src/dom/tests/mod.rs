mod tests_ast;
