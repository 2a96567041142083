mod sequence_operations;
