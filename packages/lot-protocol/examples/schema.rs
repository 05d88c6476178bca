use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use lot_protocol::{
    ConsumerExecuteMsg, CoordinatorExecuteMsg, RolloutCallbackMsg, TicketPriceQuery,
    TicketReceiverMsg,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(CoordinatorExecuteMsg), &out_dir);
    export_schema(&schema_for!(ConsumerExecuteMsg), &out_dir);
    export_schema(&schema_for!(RolloutCallbackMsg), &out_dir);
    export_schema(&schema_for!(TicketReceiverMsg), &out_dir);
    export_schema(&schema_for!(TicketPriceQuery), &out_dir);
}
