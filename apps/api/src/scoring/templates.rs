// Proposal templates, one per deliverable category.
// Placeholders: `{title}` (website only), `{budget}`, `{delivery}`.

pub const WEBSITE_PROPOSAL: &str = "Hi! I can build your {title} with clean, mobile-responsive design.

My approach:
1. Design mockup based on your requirements
2. Build responsive HTML/CSS/JS
3. Optimize for mobile and speed

Price: €{budget} | Delivery: {delivery}h

Question: Do you need any specific features like contact forms or booking systems?";

pub const SCRAPING_PROPOSAL: &str = "Hi! I can extract that data cleanly and reliably using Python.

My approach:
1. Build scraper with error handling
2. Extract and validate all data
3. Export to your preferred format

Price: €{budget} | Delivery: {delivery}h

Question: Do you need this as one-time or recurring updates?";

pub const WRITING_PROPOSAL: &str = "Hi! I can create engaging, SEO-optimized content that resonates with your audience.

My approach:
1. Research keywords and structure
2. Write clear, actionable content
3. Optimize for search and readability

Price: €{budget} | Delivery: {delivery}h

Question: Do you have specific keywords or topics in mind?";

pub const DATA_PROPOSAL: &str = "Hi! I can handle this data work efficiently and accurately.

My approach:
1. Clean and organize the data
2. Perform required analysis/entry
3. Deliver in your preferred format

Price: €{budget} | Delivery: {delivery}h

Question: What format would you like the final deliverable in?";

pub const API_PROPOSAL: &str = "Hi! I can integrate those services seamlessly.

My approach:
1. Set up secure API connections
2. Build error handling and logging
3. Test thoroughly and document

Price: €{budget} | Delivery: {delivery}h

Question: Do you have API credentials ready?";

/// Used for categories without a dedicated template.
pub const GENERIC_PROPOSAL: &str = "Hi! I can help with this project.

Price: €{budget} | Delivery: {delivery}h";
