mod test_transaction;
