mod storage_namer_test;
