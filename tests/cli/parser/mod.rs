mod flags_parser_contract;
