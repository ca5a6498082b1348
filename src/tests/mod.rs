mod unit_sqlite_users_database;
