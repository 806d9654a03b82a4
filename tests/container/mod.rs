mod chained_hash_table_tests;
