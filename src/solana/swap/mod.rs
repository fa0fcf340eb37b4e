//! Decodes confirmed Raydium swap transactions into [`Swap`] records.
//!
//! The ledger emits no swap event of its own: a trade is reconstructed from
//! the transaction's account list, its instructions and the inner spl-token
//! transfers recorded in post-execution metadata. Two instruction layouts
//! are understood, selected by [`detector`].

pub mod amount;
pub mod config;
pub mod detector;
pub mod fetch;

mod amm;
mod cp_swap;

use solana_transaction_status::{
    parse_instruction::ParsedInstruction, EncodedConfirmedTransactionWithStatusMeta,
    EncodedTransaction, UiInnerInstructions, UiInstruction, UiMessage, UiParsedInstruction,
    UiParsedMessage, UiPartiallyDecodedInstruction, UiTransactionStatusMeta,
    UiTransactionTokenBalance,
};

use crate::entity::{DecodeError, Swap};
use config::SwapConfig;
use detector::SwapProtocol;

/// Decodes a confirmed transaction snapshot into a swap record.
///
/// The snapshot must have been fetched with `jsonParsed` encoding. Failed
/// transactions and transactions without inner-instruction metadata are
/// rejected up front; afterwards the matching protocol decoder runs.
pub fn decode_swap_transaction(
    tx: &EncodedConfirmedTransactionWithStatusMeta,
    config: &SwapConfig,
) -> Result<Swap, DecodeError> {
    let meta = transaction_meta(tx)?;

    if let Some(err) = &meta.err {
        return Err(DecodeError::ExecutionFailed(err.to_string()));
    }

    // Token movement is only visible in inner instructions; without them the
    // transaction cannot be inspected yet.
    let inner_instructions = inner_instructions(meta).ok_or(DecodeError::Unconfirmed)?;

    match detector::detect(parsed_message(tx)?, inner_instructions, config)? {
        SwapProtocol::AmmV4 => amm::decode(tx, config),
        SwapProtocol::CpSwap => cp_swap::decode(tx, config),
    }
}

pub(crate) fn transaction_meta(
    tx: &EncodedConfirmedTransactionWithStatusMeta,
) -> Result<&UiTransactionStatusMeta, DecodeError> {
    tx.transaction
        .meta
        .as_ref()
        .ok_or_else(|| DecodeError::Malformed("transaction metadata is missing".to_string()))
}

pub(crate) fn parsed_message(
    tx: &EncodedConfirmedTransactionWithStatusMeta,
) -> Result<&UiParsedMessage, DecodeError> {
    match &tx.transaction.transaction {
        EncodedTransaction::Json(ui_transaction) => match &ui_transaction.message {
            UiMessage::Parsed(message) => Ok(message),
            UiMessage::Raw(_) => Err(DecodeError::Malformed(
                "transaction message is not jsonParsed".to_string(),
            )),
        },
        _ => Err(DecodeError::Malformed(
            "transaction is not jsonParsed encoded".to_string(),
        )),
    }
}

pub(crate) fn first_signature(
    tx: &EncodedConfirmedTransactionWithStatusMeta,
) -> Result<&str, DecodeError> {
    match &tx.transaction.transaction {
        EncodedTransaction::Json(ui_transaction) => ui_transaction
            .signatures
            .first()
            .map(String::as_str)
            .ok_or_else(|| DecodeError::Malformed("transaction carries no signatures".to_string())),
        _ => Err(DecodeError::Malformed(
            "transaction is not jsonParsed encoded".to_string(),
        )),
    }
}

pub(crate) fn inner_instructions(
    meta: &UiTransactionStatusMeta,
) -> Option<&[UiInnerInstructions]> {
    Option::<&Vec<UiInnerInstructions>>::from(meta.inner_instructions.as_ref())
        .map(Vec::as_slice)
}

pub(crate) fn pre_token_balances(
    meta: &UiTransactionStatusMeta,
) -> Option<&[UiTransactionTokenBalance]> {
    Option::<&Vec<UiTransactionTokenBalance>>::from(meta.pre_token_balances.as_ref())
        .map(Vec::as_slice)
}

pub(crate) fn instruction_program_id(instruction: &UiInstruction) -> Option<&str> {
    match instruction {
        UiInstruction::Parsed(UiParsedInstruction::Parsed(parsed)) => Some(&parsed.program_id),
        UiInstruction::Parsed(UiParsedInstruction::PartiallyDecoded(decoded)) => {
            Some(&decoded.program_id)
        }
        UiInstruction::Compiled(_) => None,
    }
}

pub(crate) fn parsed_instruction(instruction: &UiInstruction) -> Option<&ParsedInstruction> {
    match instruction {
        UiInstruction::Parsed(UiParsedInstruction::Parsed(parsed)) => Some(parsed),
        _ => None,
    }
}

pub(crate) fn partially_decoded(
    instruction: &UiInstruction,
) -> Option<&UiPartiallyDecodedInstruction> {
    match instruction {
        UiInstruction::Parsed(UiParsedInstruction::PartiallyDecoded(decoded)) => Some(decoded),
        _ => None,
    }
}

/// Looks up the account at a protocol-defined position, failing with the
/// semantic role of the missing account instead of panicking on an index.
pub(crate) fn account_at<'a>(
    accounts: &'a [String],
    position: usize,
    role: &'static str,
) -> Result<&'a str, DecodeError> {
    accounts
        .get(position)
        .map(String::as_str)
        .ok_or(DecodeError::AccountOutOfRange { role, position })
}

/// Resolves an account address to its pre-trade token balance entry, going
/// through the account's index in the transaction's account list.
pub(crate) fn balance_for_account<'a>(
    balances: &'a [UiTransactionTokenBalance],
    message: &UiParsedMessage,
    account: &str,
) -> Option<&'a UiTransactionTokenBalance> {
    let index = message
        .account_keys
        .iter()
        .position(|key| key.pubkey == account)?;
    balances
        .iter()
        .find(|balance| balance.account_index as usize == index)
}
