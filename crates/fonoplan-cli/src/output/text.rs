use fonoplan_core::model::GeneratedActivity;

pub fn print(activity: &GeneratedActivity) {
    println!("{}", fonoplan_core::export::plain_text(activity));
}
