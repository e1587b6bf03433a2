use crate::matrix::MembershipMatrix;
use crate::transaction_reader::Transaction;
use crate::vocabulary::Vocabulary;
use tracing::debug;

pub fn encode(transactions: &[Transaction]) -> (Vocabulary, MembershipMatrix) {
    let vocabulary = Vocabulary::from_transactions(transactions);
    let mut matrix = MembershipMatrix::new(vocabulary.len());
    for transaction in transactions {
        matrix.insert(&vocabulary.itemize(transaction));
    }
    debug!(
        transactions = matrix.num_transactions(),
        items = vocabulary.len(),
        "Encoded membership matrix"
    );
    (vocabulary, matrix)
}
